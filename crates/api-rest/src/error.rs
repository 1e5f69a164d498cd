//! HTTP error handling and conversion.
//!
//! Every failure is rendered as the `{ "error": "<message>" }` body; the
//! status code distinguishes malformed input from undefined tests.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    BoxError, Json,
};
use llm_significance_domain::{AnalysisError, ErrorResponse};
use thiserror::Error;
use tracing::{error, warn};

/// API-specific error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// The analysis itself failed
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// Request body failed field validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Request body could not be parsed
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Result alias for handlers
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Analysis(err) => {
                StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::BAD_REQUEST)
            }
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Timeout => StatusCode::REQUEST_TIMEOUT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for logging
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Analysis(err) => err.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Timeout => "TIMEOUT",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            error!(error_code = self.error_code(), error = %message, "Request failed");
        } else {
            warn!(error_code = self.error_code(), error = %message, "Request rejected");
        }

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// Map errors raised by fallible tower layers onto the JSON error body
pub async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        ApiError::Timeout
    } else {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::from(AnalysisError::UndefinedTest("zero".into())).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::from(AnalysisError::InvalidBaseline("b".into())).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_analysis_message_is_passed_through() {
        let err = ApiError::from(AnalysisError::UnsupportedTestType("anova".into()));
        assert_eq!(err.to_string(), "Unsupported test type: anova");
        assert_eq!(err.error_code(), "UNSUPPORTED_TEST_TYPE");
    }

    #[tokio::test]
    async fn test_elapsed_timeout_renders_error_body() {
        let err = handle_middleware_error(Box::new(tower::timeout::error::Elapsed::new())).await;
        assert!(matches!(err, ApiError::Timeout));
        assert_eq!(err.error_code(), "TIMEOUT");

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Request timed out" }));
    }

    #[tokio::test]
    async fn test_other_layer_errors_are_internal() {
        let err = handle_middleware_error("overloaded".into()).await;
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Internal server error: overloaded");
    }
}
