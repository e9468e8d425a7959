//! Coolify API error types.
//!
//! Every failed request ends up as one of three kinds: a structured platform
//! error, an unstructured HTTP error, or a network failure where no response
//! was received at all.

use std::collections::HashMap;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Result type for Coolify API calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by [`CoolifyClient`](super::CoolifyClient).
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response whose body matched the platform's error shape.
    #[error("Coolify API Error: {message}")]
    Platform {
        status: u16,
        message: String,
        errors: Option<HashMap<String, Vec<String>>>,
    },

    /// Non-2xx response without a structured error body.
    #[error("API Error {status}: {message}")]
    Http { status: u16, message: String },

    /// The request never produced a response (connect failure, timeout, ...).
    #[error("Network Error: {0}")]
    Network(String),
}

/// Error body returned by Coolify on failed requests.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(default)]
    pub errors: Option<HashMap<String, Vec<String>>>,
}

impl ApiError {
    /// Build an error from a non-success status and its raw response body.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
            return Self::Platform {
                status: status.as_u16(),
                message: parsed.message,
                errors: parsed.errors,
            };
        }

        // Loosely shaped bodies may still carry a usable message.
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown Status")
                    .to_string()
            });

        Self::Http {
            status: status.as_u16(),
            message,
        }
    }
}

/// reqwest's `Display` stops at "error sending request", so the cause
/// (refused connection, DNS failure, timeout) is read off the source chain.
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            let text = cause.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }

        if err.is_timeout() && !message.contains("timed out") {
            message = format!("request timed out: {}", message);
        }

        Self::Network(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_body_is_platform_error() {
        let err = ApiError::from_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"message":"Validation failed.","errors":{"name":["The name field is required."]}}"#,
        );
        assert_eq!(err.to_string(), "Coolify API Error: Validation failed.");
        match err {
            ApiError::Platform { status, errors, .. } => {
                assert_eq!(status, 422);
                assert_eq!(
                    errors.unwrap()["name"],
                    vec!["The name field is required.".to_string()]
                );
            }
            other => panic!("Expected platform error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_body_falls_back_to_status_text() {
        let err = ApiError::from_response(StatusCode::NOT_FOUND, "");
        assert_eq!(err.to_string(), "API Error 404: Not Found");
    }

    #[test]
    fn test_plain_text_body_uses_status_text() {
        let err = ApiError::from_response(StatusCode::BAD_GATEWAY, "<html>upstream</html>");
        assert_eq!(err.to_string(), "API Error 502: Bad Gateway");
    }

    #[test]
    fn test_malformed_errors_map_keeps_message() {
        let err = ApiError::from_response(
            StatusCode::BAD_REQUEST,
            r#"{"message":"Invalid token","errors":"nope"}"#,
        );
        assert_eq!(err.to_string(), "API Error 400: Invalid token");
    }

    #[test]
    fn test_network_error_display() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network Error: connection refused");
    }
}
