use axum::{
    extract::Request,
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::interceptors::AppError;

/// The only `Authorization` value accepted for job submission.
pub const ACCEPTED_CREDENTIAL: &str = "allow";

pub fn has_valid_credential(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .is_some_and(|value| value == ACCEPTED_CREDENTIAL)
}

/// Submission guard. Runs before the body is read, so rejected requests
/// never reach the queue.
pub async fn require_credential(request: Request, next: Next) -> Result<Response, AppError> {
    if !has_valid_credential(request.headers()) {
        let reason = if request.headers().contains_key(header::AUTHORIZATION) {
            "invalid authorization header"
        } else {
            "missing authorization header"
        };
        return Err(AppError::Unauthorized(reason.to_string()));
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn only_the_exact_value_is_accepted() {
        let mut headers = HeaderMap::new();
        assert!(!has_valid_credential(&headers));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer allow"));
        assert!(!has_valid_credential(&headers));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Allow"));
        assert!(!has_valid_credential(&headers));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("allow"));
        assert!(has_valid_credential(&headers));
    }
}
