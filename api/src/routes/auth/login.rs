use actix_web::{web, HttpResponse};
use rand::Rng;
use sso_core::domain::Identity;
use sso_shared::types::ApiResponse;
use tracing::info;
use validator::Validate;

use crate::dto::auth::{LoginRequest, TokenResponse};
use crate::handlers::ApiError;
use crate::state::AppState;

use super::cookies::{login_user_cookie, token_cookie};

/// Range user ids are drawn from at login
pub const USER_ID_RANGE: std::ops::Range<u64> = 1000..4000;

/// Handler for POST /api/v1/auth/token
///
/// Issues a token for the submitted name and email under a freshly drawn
/// user id.
///
/// # Request Body
///
/// ```json
/// {
///     "name": "alice",
///     "email": "alice@example.com",
///     "set_cookie": true
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "data": {
///         "token": "eyJ0eXAiOiJKV1QiLCJhbGciOiJSUzI1NiJ9...",
///         "describe": "set token in Authorization Header, [Authorization: Bearer {token}]"
///     },
///     "timestamp": "2026-10-17T08:30:00Z"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Name missing or too long, malformed email
/// - 500 Internal Server Error: Signing failure
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    request.validate()?;

    let mut identity = Identity::new(rand::thread_rng().gen_range(USER_ID_RANGE), request.name);
    identity.email = request.email;

    let token = state.token_service.issue_token(&identity)?;
    info!(user_id = identity.id, set_cookie = request.set_cookie, "Issued token");

    let mut response = HttpResponse::Ok();
    if request.set_cookie {
        response.cookie(token_cookie(&state.cookies, &token));
        response.cookie(login_user_cookie(&state.cookies, &identity)?);
    }

    Ok(response.json(ApiResponse::success(TokenResponse::new(token))))
}
