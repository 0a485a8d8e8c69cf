//! Common error type and alias.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Upstream answered with something other than 200.
    #[error("{status}: {body}")]
    Upstream { status: u16, body: String },

    /// Upstream answered 200 but the body is missing an expected field.
    #[error("{0}")]
    Structural(String),

    /// Connection, timeout or body decoding failure on the outbound call.
    #[error("{0}")]
    HttpClient(#[from] reqwest::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn missing(path: &str) -> Self {
        AppError::Structural(format!("upstream response is missing '{}'", path))
    }
}
