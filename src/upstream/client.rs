//! Thin HTTP client for the PicLumen endpoints.
//!
//! - `create` posts a generation request to `/api/gen/create`.
//! - `check` posts `[mark_id]` to `/api/task/batch-process-task`.
//!
//! No connection pool is kept between calls: each call builds its own
//! `reqwest::Client`, which is dropped when the call returns.
use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::error::{AppError, AppResult};
use crate::generation::request::GenerationRequest;
use crate::generation::status::{field_text, StatusResult};

pub const CREATE_PATH: &str = "/api/gen/create";
pub const BATCH_PROCESS_PATH: &str = "/api/task/batch-process-task";

/// Headers that make the relay look like the PicLumen web app.
pub const BROWSER_HEADERS: [(&str, &str); 6] = [
    ("accept", "application/json"),
    ("content-type", "application/json;charset=UTF-8"),
    ("platform", "Web"),
    ("origin", "https://piclumen.com"),
    ("referer", "https://piclumen.com/"),
    ("user-agent", "Mozilla/5.0"),
];

#[derive(Debug, Clone)]
pub struct UpstreamClient {
    base_url: String,
    timeout: Duration,
}

impl UpstreamClient {
    pub fn new(base_url: String) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: String, timeout: Duration) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        UpstreamClient { base_url: base, timeout }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Submit a generation job and return the upstream `markId`.
    pub async fn create(&self, token: &str, request: &GenerationRequest) -> AppResult<String> {
        let url = format!("{}{}", self.base_url, CREATE_PATH);
        tracing::info!("Submitting generation to upstream at URL: {}", url);
        tracing::debug!("Generation payload: {:?}", request);

        let client = self.http_client()?;
        let body = self.send(client.post(&url), token, request).await?;

        body.get("data")
            .and_then(|d| d.get("markId"))
            .and_then(field_text)
            .ok_or_else(|| AppError::missing("data.markId"))
    }

    /// Ask upstream for the state of a single job.
    pub async fn check(&self, token: &str, mark_id: &str) -> AppResult<StatusResult> {
        let url = format!("{}{}", self.base_url, BATCH_PROCESS_PATH);
        tracing::info!(mark_id, "Checking task status at URL: {}", url);

        let client = self.http_client()?;
        let body = self.send(client.post(&url), token, &[mark_id]).await?;
        StatusResult::from_batch_body(&body)
    }

    fn http_client(&self) -> AppResult<Client> {
        Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(AppError::HttpClient)
    }

    async fn send<T: Serialize + ?Sized>(
        &self,
        builder: RequestBuilder,
        token: &str,
        payload: &T,
    ) -> AppResult<Value> {
        let builder = BROWSER_HEADERS
            .iter()
            .fold(builder, |b, (name, value)| b.header(*name, *value))
            .header("authorization", token);

        // content-type is already set, so `.json()` keeps the charset variant
        let response = builder
            .json(payload)
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_else(|_| "Unable to read error body".to_string());
            tracing::error!("Upstream returned {}: {}", status, body);
            return Err(AppError::Upstream { status: status.as_u16(), body });
        }

        response.json().await.map_err(AppError::HttpClient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = UpstreamClient::new("https://api.example.com///".to_string());
        assert_eq!(client.base_url(), "https://api.example.com");
    }

    #[test]
    fn default_timeout_is_two_minutes() {
        let client = UpstreamClient::new("http://localhost".to_string());
        assert_eq!(client.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(client.timeout(), Duration::from_secs(120));
    }

    #[test]
    fn browser_headers_carry_platform_marker() {
        assert!(BROWSER_HEADERS.contains(&("platform", "Web")));
        assert!(BROWSER_HEADERS.contains(&("origin", "https://piclumen.com")));
    }
}
