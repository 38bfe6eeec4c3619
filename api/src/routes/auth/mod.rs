//! Authentication route handlers
//!
//! All three operate on the `/api/v1/auth/token` resource:
//! - `POST` issues a token (login)
//! - `DELETE` clears the login cookies (logout)
//! - `GET` returns the caller's verified identity

pub mod cookies;
pub mod current_user;
pub mod login;
pub mod logout;

pub use current_user::current_user;
pub use login::login;
pub use logout::logout;
