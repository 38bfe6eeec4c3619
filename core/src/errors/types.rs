//! Error types for token issuance, verification and key loading.
//!
//! Verification failures are deliberately collapsed into a single
//! [`TokenError::InvalidToken`]; the precise reason is only ever logged.

use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Failed to load key material: {message}")]
    KeyLoadFailure { message: String },

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

impl TokenError {
    /// Creates an `InvalidInput` error with the given message
    pub fn invalid_input(message: impl Into<String>) -> Self {
        TokenError::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates a `KeyLoadFailure` error with the given message
    pub fn key_load(message: impl Into<String>) -> Self {
        TokenError::KeyLoadFailure {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;

    #[test]
    fn test_invalid_token_message_is_generic() {
        assert_eq!(TokenError::InvalidToken.to_string(), "Invalid token");
    }

    #[test]
    fn test_domain_error_bridges_token_error() {
        let err: DomainError = TokenError::invalid_input("empty user").into();
        assert_eq!(err.to_string(), "Invalid input: empty user");
        assert!(matches!(
            err,
            DomainError::Token(TokenError::InvalidInput { ref message }) if message == "empty user"
        ));
    }
}
