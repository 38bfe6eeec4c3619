//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::TokenError;

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Token(#[from] TokenError),
}
