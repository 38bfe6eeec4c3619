//! Shared configuration and common types for the jwt-sso server
//!
//! This crate provides functionality used across server modules:
//! - Layered configuration types
//! - Error response structures
//! - API response envelopes

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CookieConfig, CorsConfig, Environment, LogFormat, LoggingConfig,
    ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{ApiResponse, HealthResponse};
