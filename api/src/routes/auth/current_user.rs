use actix_web::HttpResponse;
use sso_shared::types::ApiResponse;

use crate::middleware::auth::AuthenticatedUser;

/// Handler for GET /api/v1/auth/token
///
/// Returns the identity carried by the caller's token. Runs behind
/// [`JwtAuth`](crate::middleware::JwtAuth).
pub async fn current_user(user: AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(user.into_inner()))
}
