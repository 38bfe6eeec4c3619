//! Domain entities representing the subject of a token and its signed payload.

pub mod identity;
pub mod token;

// Re-export commonly used types
pub use identity::Identity;
pub use token::{Claims, DEFAULT_ISSUER, DEFAULT_TOKEN_EXPIRY_SECS, MAX_TOKEN_EXPIRY_SECS, NOT_BEFORE_SKEW_SECS};
