//! Outcome of a status check against `/api/task/batch-process-task`.
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// The only upstream status label that means the image is ready.
pub const SUCCESS_STATUS: &str = "success";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusResult {
    /// Still in flight; carries the raw upstream status label.
    Pending { status: String },
    Complete { image_url: String },
}

impl StatusResult {
    /// Read the first task of a batch-process response body.
    ///
    /// Expected shape: `{"data": [{"status": "...", "img_urls": [{"imgUrl": "..."}]}]}`.
    /// `img_urls` is only consulted once the status reads `success`.
    pub fn from_batch_body(body: &Value) -> AppResult<Self> {
        let task = body
            .get("data")
            .and_then(|d| d.get(0))
            .ok_or_else(|| AppError::missing("data[0]"))?;
        let status = task
            .get("status")
            .and_then(field_text)
            .ok_or_else(|| AppError::missing("data[0].status"))?;

        if status != SUCCESS_STATUS {
            return Ok(StatusResult::Pending { status });
        }

        let image_url = task
            .get("img_urls")
            .and_then(|urls| urls.get(0))
            .and_then(|first| first.get("imgUrl"))
            .and_then(field_text)
            .ok_or_else(|| AppError::missing("data[0].img_urls[0].imgUrl"))?;
        Ok(StatusResult::Complete { image_url })
    }
}

/// Text of an upstream field: strings as-is, other present values as their
/// JSON text. `null` counts as absent.
pub fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
