//! # jwt-sso Core
//!
//! Token issuance and validation engine for the jwt-sso service.
//! This crate holds the identity and claim entities, the RSA key loader,
//! the RS256 [`TokenService`](services::token::TokenService), and the error
//! types callers map onto their transport.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{Claims, Identity};
pub use errors::{DomainError, TokenError};
pub use services::{KeyPair, TokenService, TokenServiceConfig};
