//! Cookies delivering the token and login user to browser clients

use actix_web::cookie::{time::Duration, Cookie};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use sso_core::domain::Identity;
use sso_shared::config::CookieConfig;

use crate::handlers::ApiError;

/// Everything but RFC 3986 unreserved characters is escaped in cookie values
const COOKIE_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

fn build(config: &CookieConfig, name: &str, value: String) -> Cookie<'static> {
    let mut cookie = Cookie::build(name.to_string(), value)
        .path(config.path.clone())
        .max_age(Duration::seconds(config.max_age_secs))
        .secure(config.secure)
        .http_only(config.http_only)
        .finish();
    if let Some(domain) = &config.domain {
        cookie.set_domain(domain.clone());
    }
    cookie
}

/// Cookie carrying the raw token
pub fn token_cookie(config: &CookieConfig, token: &str) -> Cookie<'static> {
    build(config, &config.token_name, token.to_string())
}

/// Cookie carrying the identity as percent-encoded JSON
pub fn login_user_cookie(config: &CookieConfig, identity: &Identity) -> Result<Cookie<'static>, ApiError> {
    let json = serde_json::to_string(identity)
        .map_err(|e| ApiError::Internal(format!("Failed to encode login user: {}", e)))?;
    let value = utf8_percent_encode(&json, COOKIE_VALUE).to_string();
    Ok(build(config, &config.user_name, value))
}

/// Expired copies of both cookies, matching their domain and path
pub fn removal_cookies(config: &CookieConfig) -> [Cookie<'static>; 2] {
    [&config.token_name, &config.user_name].map(|name| {
        let mut cookie = build(config, name, String::new());
        cookie.make_removal();
        cookie
    })
}
