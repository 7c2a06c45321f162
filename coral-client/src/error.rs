//! Gateway error types

use thiserror::Error;

/// Gateway error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport failed (no usable response)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not match the documented shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required; the session has been invalidated
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request rejected by server-side validation
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        /// Field name to message(s), passed through for the form layer
        errors: Option<serde_json::Value>,
    },

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Human-readable message for the UI
    ///
    /// Transport failures collapse into a generic connectivity message;
    /// server rejections surface their message verbatim.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Http(_) => "Network error - please check your connection".to_string(),
            ClientError::InvalidResponse(_) | ClientError::Serialization(_) => {
                "Unexpected server response".to_string()
            }
            ClientError::Unauthorized => "Authentication required".to_string(),
            ClientError::Forbidden(message)
            | ClientError::NotFound(message)
            | ClientError::Internal(message) => message.clone(),
            ClientError::Validation { message, .. } => message.clone(),
        }
    }

    /// Field errors from a validation rejection, when present
    pub fn field_errors(&self) -> Option<&serde_json::Value> {
        match self {
            ClientError::Validation {
                errors: Some(errors),
                ..
            } => Some(errors),
            _ => None,
        }
    }
}

/// Result type for gateway operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_surfaces_server_text() {
        let err = ClientError::Validation {
            message: "Quantity exceeds stock".to_string(),
            errors: None,
        };
        assert_eq!(err.user_message(), "Quantity exceeds stock");

        let err = ClientError::NotFound("Cart item not found".to_string());
        assert_eq!(err.user_message(), "Cart item not found");
    }

    #[test]
    fn test_field_errors_only_on_validation() {
        let errors = serde_json::json!({"price": ["Price must be a positive number"]});
        let err = ClientError::Validation {
            message: "Validation failed".to_string(),
            errors: Some(errors.clone()),
        };
        assert_eq!(err.field_errors(), Some(&errors));
        assert!(ClientError::Unauthorized.field_errors().is_none());
    }
}
