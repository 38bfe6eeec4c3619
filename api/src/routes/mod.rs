//! Route registration

pub mod auth;
pub mod health;

use actix_web::{error::InternalError, web, HttpResponse};
use sso_shared::errors::{error_codes, ErrorResponse};

use crate::middleware::auth::JwtAuth;

/// Registers every route of the service
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check)).service(
        web::scope("/api/v1").service(
            web::resource("/auth/token")
                .route(web::post().to(auth::login))
                .route(web::delete().to(auth::logout))
                .route(web::get().to(auth::current_user).wrap(JwtAuth::new())),
        ),
    );
}

/// JSON extractor settings returning malformed bodies as structured 400s
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(16 * 1024)
        .error_handler(|err, _req| {
            let body = ErrorResponse::new(error_codes::BAD_REQUEST, format!("Invalid request body: {}", err));
            InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
        })
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
