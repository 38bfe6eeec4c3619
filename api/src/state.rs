//! Application state shared by every worker

use std::sync::Arc;

use sso_core::services::token::TokenService;
use sso_shared::config::CookieConfig;

/// Services and settings handlers reach through `web::Data<AppState>`
#[derive(Debug, Clone)]
pub struct AppState {
    pub token_service: Arc<TokenService>,
    pub cookies: CookieConfig,
}

impl AppState {
    pub fn new(token_service: Arc<TokenService>, cookies: CookieConfig) -> Self {
        Self {
            token_service,
            cookies,
        }
    }
}
