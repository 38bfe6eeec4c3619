//! CORS middleware configuration for cross-origin requests.
//!
//! Development is permissive unless origins are listed; elsewhere only the
//! configured origins are allowed.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use sso_shared::config::{CorsConfig, Environment};
use tracing::info;

/// Creates a CORS middleware instance from configuration
pub fn create_cors(config: &CorsConfig, environment: Environment) -> Cors {
    let permissive = config.allows_any_origin()
        || (environment.is_development() && config.allowed_origins.is_empty());

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .supports_credentials()
        .max_age(config.max_age_secs());

    if permissive {
        info!(%environment, "Configuring permissive CORS");
        cors = cors.allow_any_origin();
    } else {
        for origin in config.allowed_origins.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
            info!(origin, "Adding allowed origin");
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};

    async fn preflight(config: CorsConfig, environment: Environment, origin: &str) -> StatusCode {
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&config, environment))
                .route("/ping", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/ping")
            .insert_header((header::ORIGIN, origin))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "GET"))
            .to_request();

        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn test_development_allows_any_origin() {
        let status = preflight(CorsConfig::default(), Environment::Development, "https://anywhere.example").await;

        assert_eq!(status, StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_production_only_allows_listed_origins() {
        let config = CorsConfig {
            allowed_origins: vec!["https://app.example.com".to_string()],
            max_age: None,
        };

        let allowed = preflight(config.clone(), Environment::Production, "https://app.example.com").await;
        let denied = preflight(config, Environment::Production, "https://evil.example").await;

        assert_eq!(allowed, StatusCode::OK);
        assert_eq!(denied, StatusCode::BAD_REQUEST);
    }
}
