use std::process;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use sso_api::{create_app, telemetry, AppState};
use sso_core::services::token::{KeyPair, TokenService, TokenServiceConfig};
use sso_shared::config::AppConfig;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    telemetry::init_tracing(&config.logging);
    info!(environment = %config.environment, "Starting jwt-sso API server");

    // Signing keys are required before any socket is bound
    let keys = match KeyPair::load_from_dir(&config.auth.key_dir) {
        Ok(keys) => keys,
        Err(e) => {
            error!(error = %e, key_dir = %config.auth.key_dir, "Failed to load signing keys");
            process::exit(1);
        }
    };

    let token_config = TokenServiceConfig::new(config.auth.issuer.clone())
        .with_expiry_secs(config.auth.token_expiry_secs);
    let token_service = match TokenService::new(token_config, keys) {
        Ok(service) => Arc::new(service),
        Err(e) => {
            error!(error = %e, "Invalid token service configuration");
            process::exit(1);
        }
    };

    let state = web::Data::new(AppState::new(token_service, config.cookie.clone()));
    let bind_address = config.server.bind_address();
    info!(%bind_address, issuer = %config.auth.issuer, "Server will bind");

    let cors = config.cors.clone();
    let environment = config.environment;
    let mut server = HttpServer::new(move || create_app(state.clone(), &cors, environment))
        .shutdown_timeout(config.server.shutdown_timeout_secs);
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await
}
