use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{app::models::api_error::ApiError, transformations::errors::TransformError};

pub static SUCCESS_MESSAGE: &str = "Transformation completed successfully";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformStatus {
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformProgress {
    pub status: TransformStatus,
    pub progress: u8,
    pub message: String,
}

impl TransformProgress {
    pub fn succeeded() -> Self {
        Self {
            status: TransformStatus::Succeeded,
            progress: 100,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn failed(message: &str) -> Self {
        Self {
            status: TransformStatus::Failed,
            progress: 0,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformResponse {
    pub transformed_image_url: String,
    pub progress: TransformProgress,
}

impl TransformResponse {
    pub fn succeeded(transformed_image_url: String) -> Self {
        Self {
            transformed_image_url,
            progress: TransformProgress::succeeded(),
        }
    }
}

/// Failure side of `POST /transform`: always carries a failed progress
/// descriptor next to the error message.
#[derive(Debug, PartialEq)]
pub struct TransformFailure {
    pub code: StatusCode,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TransformFailureBody {
    pub error: String,
    pub progress: TransformProgress,
}

impl TransformFailure {
    pub fn body(&self) -> TransformFailureBody {
        TransformFailureBody {
            error: self.message.to_string(),
            progress: TransformProgress::failed(&self.message),
        }
    }
}

impl From<TransformError> for TransformFailure {
    fn from(e: TransformError) -> Self {
        Self {
            code: e.status_code(),
            message: e.to_string(),
        }
    }
}

impl From<ApiError> for TransformFailure {
    fn from(e: ApiError) -> Self {
        Self {
            code: e.code,
            message: e.message,
        }
    }
}

impl From<JsonRejection> for TransformFailure {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            code: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for TransformFailure {
    fn into_response(self) -> Response {
        (self.code, Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn success_serializes_to_wire_shape() {
        let value = serde_json::to_value(TransformResponse::succeeded(
            "https://x/img.png".to_string(),
        ))
        .unwrap();

        assert_eq!(
            value,
            json!({
                "transformedImageUrl": "https://x/img.png",
                "progress": {
                    "status": "succeeded",
                    "progress": 100,
                    "message": "Transformation completed successfully"
                }
            })
        );
    }

    #[test]
    fn failure_carries_failed_progress() {
        let failure = TransformFailure::from(TransformError::Timeout("job timed out".to_string()));
        assert_eq!(failure.code, StatusCode::INTERNAL_SERVER_ERROR);

        let value = serde_json::to_value(failure.body()).unwrap();
        assert_eq!(
            value,
            json!({
                "error": "job timed out",
                "progress": { "status": "failed", "progress": 0, "message": "job timed out" }
            })
        );
    }

    #[test]
    fn validation_failure_is_bad_request() {
        let failure =
            TransformFailure::from(TransformError::Validation("Invalid style preset".to_string()));
        assert_eq!(failure.code, StatusCode::BAD_REQUEST);
        assert_eq!(failure.body().progress.status, TransformStatus::Failed);
    }
}
