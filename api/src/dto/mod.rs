pub mod auth;

pub use auth::{LoginRequest, LogoutResponse, TokenResponse, TOKEN_USAGE_HINT};
