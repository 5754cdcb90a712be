use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Errors surfaced by the dashboard API handlers.
///
/// The control surface validates everything at the parse boundary, so a
/// request either applies cleanly or is rejected here with a 400.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// JSON error body. The dashboard page only ever reads the `error` key.
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "request rejected");
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_maps_to_bad_request() {
        let err = ApiError::InvalidArgument("flag must be 'true'".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn display_carries_the_offending_argument() {
        let err = ApiError::InvalidArgument("unknown field 'soil'".to_string());
        assert_eq!(err.to_string(), "Invalid argument: unknown field 'soil'");
    }

    #[test]
    fn body_is_exactly_the_error_key() {
        let body = ErrorResponse {
            error: "bad".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "error": "bad" })
        );
    }
}
