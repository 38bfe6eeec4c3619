//! JWT authentication middleware for protecting API endpoints.
//!
//! The token is taken from `Authorization: Bearer <token>`, falling back to
//! the token cookie browser clients receive at login. A verified
//! [`Identity`] is injected into the request extensions; every failure ends
//! the request with the same 401 body.

use actix_web::{
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use sso_core::domain::Identity;
use std::{
    future::{ready, Ready},
    ops::Deref,
    rc::Rc,
};
use tracing::debug;

use crate::handlers::ApiError;
use crate::state::AppState;

/// JWT authentication middleware factory
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtAuth;

impl JwtAuth {
    /// Creates a new JWT authentication middleware
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            match authenticate(&req) {
                Some(identity) => {
                    req.extensions_mut().insert(identity);
                    service.call(req).await.map(ServiceResponse::map_into_left_body)
                }
                None => {
                    let response = ApiError::unauthorized().error_response();
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

/// Verifies the request's token, if any, against the shared token service
fn authenticate(req: &ServiceRequest) -> Option<Identity> {
    let Some(state) = req.app_data::<web::Data<AppState>>() else {
        debug!("Authentication rejected: token service not configured");
        return None;
    };

    let Some(token) = extract_bearer_token(req).or_else(|| extract_cookie_token(req, &state.cookies.token_name))
    else {
        debug!(path = %req.path(), "Authentication rejected: no token presented");
        return None;
    };

    state.token_service.verify_token(&token).ok()
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
}

/// Extracts the token from the login cookie
fn extract_cookie_token(req: &ServiceRequest, cookie_name: &str) -> Option<String> {
    req.cookie(cookie_name)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}

/// Extractor for the identity verified by [`JwtAuth`]
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Identity);

impl AuthenticatedUser {
    pub fn into_inner(self) -> Identity {
        self.0
    }
}

impl Deref for AuthenticatedUser {
    type Target = Identity;

    fn deref(&self) -> &Identity {
        &self.0
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<Identity>()
            .cloned()
            .map(AuthenticatedUser)
            .ok_or_else(|| ApiError::unauthorized().into());

        ready(result)
    }
}
