//! Application factory
//!
//! Builds the actix-web [`App`] shared by the binary and the integration
//! tests.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error,
};
use sso_shared::config::{CorsConfig, Environment};
use tracing_actix_web::TracingLogger;

use crate::middleware::cors::create_cors;
use crate::routes::{configure, json_config, not_found};
use crate::state::AppState;

/// Create and configure the application with all dependencies
pub fn create_app(
    state: web::Data<AppState>,
    cors: &CorsConfig,
    environment: Environment,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .app_data(json_config())
        // Registration order is inverse to execution: the request span wraps CORS
        .wrap(create_cors(cors, environment))
        .wrap(TracingLogger::default())
        .configure(configure)
        .default_service(web::route().to(not_found))
}
