//! Tool-specific error types.

use thiserror::Error;

use crate::domains::coolify::ApiError;

/// Errors that can occur during tool operations.
///
/// None of these cross the protocol boundary as protocol errors: the registry
/// renders every one of them as an error-flagged text result.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The Coolify API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_is_transparent() {
        let err: ToolError = ApiError::Network("connection refused".to_string()).into();
        assert_eq!(err.to_string(), "Network Error: connection refused");
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            ToolError::not_found("deploy_everything").to_string(),
            "Unknown tool: deploy_everything"
        );
    }
}
