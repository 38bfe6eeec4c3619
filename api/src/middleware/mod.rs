pub mod auth;
pub mod cors;

pub use auth::{AuthenticatedUser, JwtAuth};
pub use cors::create_cors;
