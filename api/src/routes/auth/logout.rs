use actix_web::{web, HttpResponse};
use sso_shared::types::ApiResponse;

use crate::dto::auth::LogoutResponse;
use crate::state::AppState;

use super::cookies::removal_cookies;

/// Handler for DELETE /api/v1/auth/token
///
/// Expires the token and login-user cookies. Tokens themselves stay valid
/// until they expire; there is no server-side session to end.
pub async fn logout(state: web::Data<AppState>) -> HttpResponse {
    let mut response = HttpResponse::Ok();
    for cookie in removal_cookies(&state.cookies) {
        response.cookie(cookie);
    }

    response.json(ApiResponse::success(LogoutResponse {
        message: "Logged out successfully".to_string(),
    }))
}
