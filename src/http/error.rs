//! HTTP error handling.
//!
//! Only one error crosses from handlers into responses on its own:
//! a required query parameter that is missing (or empty). Everything
//! involving the backends goes through the outcome mapper instead.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::dto::Message;

/// Handler-level API error.
#[derive(Debug)]
pub enum ApiError {
    /// A required query parameter was absent or empty. Detected before
    /// any backend call is attempted.
    MissingField(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingField(field) => {
                tracing::warn!(field, "missing required query parameter");
                (
                    StatusCode::BAD_REQUEST,
                    Json(Message::new(format!("Campo obrigatório ausente: {}", field))),
                )
                    .into_response()
            }
        }
    }
}

/// Accept a required query parameter, rejecting absent or empty values.
pub fn require(value: Option<String>, field: &'static str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::MissingField(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_accepts_non_empty_value() {
        assert_eq!(
            require(Some("maria@example.com".into()), "email").unwrap(),
            "maria@example.com"
        );
    }

    #[test]
    fn test_require_rejects_absent_and_empty() {
        assert!(matches!(
            require(None, "senha"),
            Err(ApiError::MissingField("senha"))
        ));
        assert!(matches!(
            require(Some(String::new()), "senha"),
            Err(ApiError::MissingField("senha"))
        ));
    }
}
