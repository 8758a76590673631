//! Shared error types: the normalized API error and client-side validation.

use serde::{Deserialize, Serialize};

/// Shown when the server rejected a request without saying why.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// Shown when no usable response came back at all.
pub const CONNECTION_ERROR_MESSAGE: &str = "Failed to reach the server";

/// Error envelope returned by the API on non-2xx responses.
///
/// The server puts the human-readable reason in `error`. Success bodies
/// sometimes carry a `message` instead, which is never treated as an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Attempt to pull a user-facing message out of an error response body.
pub fn try_error_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<ErrorBody>(body).ok()?;
    parsed
        .error
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
}

/// The single error shape every API call resolves to.
///
/// `status` is the HTTP status, or `0` when the request never produced a
/// readable response (network failure, unreadable or non-JSON body).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Connectivity failure: no response was received.
    pub fn connection() -> Self {
        Self::new(0, CONNECTION_ERROR_MESSAGE)
    }

    /// Build the error for a non-success response.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = try_error_message(body).unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
        Self::new(status, message)
    }

    pub fn is_connection_failure(&self) -> bool {
        self.status == 0
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

/// Form validation failures. These are rendered inline next to the form and
/// never reach the toast manager.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingRequired { field: &'static str },
    #[error("Please choose a rating between 1 and 5")]
    RatingOutOfRange(u8),
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_preferred() {
        let err = ApiError::from_response(400, r#"{"error":"Post not found"}"#);
        assert_eq!(err.status, 400);
        assert_eq!(err.message, "Post not found");
        assert_eq!(err.to_string(), "Post not found");
    }

    #[test]
    fn falls_back_to_generic_message() {
        assert_eq!(
            ApiError::from_response(500, "<html>bad gateway</html>").message,
            GENERIC_ERROR_MESSAGE
        );
        assert_eq!(
            ApiError::from_response(500, r#"{"error":"   "}"#).message,
            GENERIC_ERROR_MESSAGE
        );
        // a success-style `message` is not an error reason
        assert_eq!(
            ApiError::from_response(409, r#"{"message":"created"}"#).message,
            GENERIC_ERROR_MESSAGE
        );
    }

    #[test]
    fn connection_error_has_status_zero() {
        let err = ApiError::connection();
        assert!(err.is_connection_failure());
        assert_eq!(err.message, CONNECTION_ERROR_MESSAGE);
        assert!(!ApiError::new(401, "no").is_connection_failure());
        assert!(ApiError::new(401, "no").is_unauthorized());
    }
}
