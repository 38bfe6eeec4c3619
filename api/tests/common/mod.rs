//! Shared setup for API integration tests

use std::path::PathBuf;
use std::sync::Arc;

use actix_web::web;
use sso_api::AppState;
use sso_core::services::token::{KeyPair, TokenService, TokenServiceConfig};
use sso_shared::config::CookieConfig;

pub const TEST_ISSUER: &str = "sso.test.local";

pub fn fixture_key_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../core/tests/fixtures/keys")
}

pub fn token_service_from(key_dir: PathBuf) -> Arc<TokenService> {
    let keys = KeyPair::load_from_dir(key_dir).expect("Failed to load fixture keys");
    Arc::new(TokenService::new(TokenServiceConfig::new(TEST_ISSUER), keys).unwrap())
}

pub fn test_state() -> web::Data<AppState> {
    web::Data::new(AppState::new(
        token_service_from(fixture_key_dir()),
        CookieConfig::default(),
    ))
}
