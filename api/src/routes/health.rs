use actix_web::HttpResponse;
use sso_shared::types::HealthResponse;

/// Health check endpoint handler
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
