use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::response::ApiError;

pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized to access this resource";

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::MalformedBody(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            AppError::Unauthorized(reason) => {
                tracing::warn!("Rejected request: {}", reason);
                ApiError::new(UNAUTHORIZED_MESSAGE, status).into_response()
            }
            // No body; the cause only goes to the log.
            AppError::MalformedBody(reason) => {
                tracing::error!("Malformed request body: {}", reason);
                status.into_response()
            }
        }
    }
}

// Result type alias
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn unauthorized_renders_error_payload() {
        let response = AppError::Unauthorized("missing header".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(
            std::str::from_utf8(&body).unwrap(),
            r#"{"error":"Unauthorized to access this resource","status":401}"#
        );
    }

    #[tokio::test]
    async fn malformed_body_is_an_empty_500() {
        let response = AppError::MalformedBody("expected array".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }
}
