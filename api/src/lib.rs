//! HTTP surface of the jwt-sso service: login, logout and current-user
//! routes over the core token service.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use app::create_app;
pub use state::AppState;
