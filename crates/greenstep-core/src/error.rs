//! Error types for the API client and the operation coordinator

use thiserror::Error;

/// Network access error
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request never produced a response
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body did not match the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server answered with a non-success status
    #[error("Server error {status}")]
    Server { status: u16, message: Option<String> },

    /// Operation needs a persisted token and there is none
    #[error("No token found")]
    MissingToken,
}

impl ApiError {
    /// Message to surface to the user: the server's own `message` when it
    /// sent one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::MissingToken => self.to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// Result type for network operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Failure of a coordinated operation, already reduced to its message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct OperationError {
    message: String,
}

impl OperationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_wins() {
        let err = ApiError::Server {
            status: 400,
            message: Some("Email already registered".into()),
        };
        assert_eq!(err.user_message("Registration failed"), "Email already registered");
    }

    #[test]
    fn test_fallback_without_message() {
        let err = ApiError::Server {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message("Failed to fetch goals"), "Failed to fetch goals");

        let err = ApiError::Json(serde_json::from_str::<u8>("x").unwrap_err());
        assert_eq!(err.user_message("Login failed"), "Login failed");
    }

    #[test]
    fn test_missing_token_message() {
        assert_eq!(ApiError::MissingToken.user_message("Authentication failed"), "No token found");
    }
}
