//! Token service module for JWT management
//!
//! This module handles all token-related operations:
//! - RSA key material loading from a key directory
//! - RS256 identity token issuance
//! - Token verification back into an [`Identity`](crate::domain::Identity)

mod config;
mod key_material;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use key_material::{KeyPair, PRIVATE_KEY_FILE, PUBLIC_KEY_FILE};
pub use service::{TokenService, SIGNING_ALGORITHM};
