//! Response bodies returned by the relay and the HTTP mapping of failures.
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::error::AppError;
use crate::generation::status::StatusResult;

pub const CREATION_INITIATED: &str = "Image creation initiated";
pub const GENERATION_SUCCESSFUL: &str = "Image generation successful";

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub statuscode: u16,
    pub message: String,
    pub mark_id: String,
}

impl SubmitResponse {
    pub fn initiated(mark_id: String) -> Self {
        SubmitResponse { statuscode: 200, message: CREATION_INITIATED.to_string(), mark_id }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CheckResponse {
    Pending { statuscode: u16, message: String, mark_id: String },
    Complete { statuscode: u16, message: String, image_url: String },
}

impl CheckResponse {
    pub fn from_status(result: StatusResult, mark_id: String) -> Self {
        match result {
            StatusResult::Pending { status } => CheckResponse::Pending {
                statuscode: 202,
                message: format!("Image still processing. Current status: {}", status),
                mark_id,
            },
            StatusResult::Complete { image_url } => CheckResponse::Complete {
                statuscode: 200,
                message: GENERATION_SUCCESSFUL.to_string(),
                image_url,
            },
        }
    }
}

/// An error leaving the HTTP boundary as `{"detail": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    /// Submit path: upstream status failures are mirrored, anything else is an
    /// internal fault whose details stay in the log.
    pub fn from_submit(err: AppError) -> Self {
        match err {
            AppError::Upstream { status, body } => ApiError {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                detail: body,
            },
            other => {
                tracing::error!("Unhandled fault while submitting generation: {}", other);
                ApiError {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    detail: "Internal Server Error".to_string(),
                }
            }
        }
    }

    /// Check path: every failure becomes a 500 carrying the error text.
    pub fn from_check(err: AppError) -> Self {
        tracing::error!("Status check failed: {}", err);
        ApiError { status: StatusCode::INTERNAL_SERVER_ERROR, detail: err.to_string() }
    }
}

/// Missing or malformed query parameters are a validation failure.
impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError { status: StatusCode::UNPROCESSABLE_ENTITY, detail: rejection.body_text() }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError { status: rejection.status(), detail: rejection.body_text() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pending_body_shape() {
        let body = CheckResponse::from_status(
            StatusResult::Pending { status: "queued".to_string() },
            "m1".to_string(),
        );
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({
                "statuscode": 202,
                "message": "Image still processing. Current status: queued",
                "mark_id": "m1"
            })
        );
    }

    #[test]
    fn submit_mirrors_upstream_status() {
        let err = ApiError::from_submit(AppError::Upstream { status: 429, body: "slow down".to_string() });
        assert_eq!(err.status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(err.detail, "slow down");
    }

    #[test]
    fn submit_hides_structural_faults() {
        let err = ApiError::from_submit(AppError::missing("data.markId"));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail, "Internal Server Error");
    }

    #[test]
    fn check_reports_everything_as_500() {
        let err = ApiError::from_check(AppError::Upstream { status: 403, body: "forbidden".to_string() });
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail, "403: forbidden");
    }
}
