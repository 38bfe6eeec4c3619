//! Business services containing the token engine.

pub mod token;

// Re-export commonly used types
pub use token::{KeyPair, TokenService, TokenServiceConfig};
