//! Token signing and cookie transport configuration

use serde::{Deserialize, Serialize};

/// Key location and token lifetimes
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Directory holding `id_rsa` and `id_rsa.pub`
    pub key_dir: String,

    /// JWT issuer claim
    pub issuer: String,

    /// Token lifetime in seconds
    pub token_expiry_secs: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            key_dir: String::from("keys"),
            issuer: String::from("jwt-sso.local"),
            token_expiry_secs: 604800, // 7 days
        }
    }
}

/// Cookies carrying the token and the login user to browser clients
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CookieConfig {
    /// Cookie holding the raw token
    pub token_name: String,

    /// Cookie holding the identity as JSON
    pub user_name: String,

    /// Cookie domain; host-only when unset
    pub domain: Option<String>,

    pub path: String,

    /// Cookie lifetime in seconds
    pub max_age_secs: i64,

    /// Secure flag (HTTPS only)
    pub secure: bool,

    /// HttpOnly flag; off so browser scripts can read the login user
    pub http_only: bool,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            token_name: String::from("jwt-token"),
            user_name: String::from("loginUser"),
            domain: None,
            path: String::from("/"),
            max_age_secs: 86400, // 1 day
            secure: false,
            http_only: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_config_default() {
        let config = AuthConfig::default();
        assert_eq!(config.key_dir, "keys");
        assert_eq!(config.issuer, "jwt-sso.local");
        assert_eq!(config.token_expiry_secs, 604800);
    }

    #[test]
    fn test_cookie_config_default() {
        let config = CookieConfig::default();
        assert_eq!(config.token_name, "jwt-token");
        assert_eq!(config.user_name, "loginUser");
        assert_eq!(config.domain, None);
        assert_eq!(config.path, "/");
        assert_eq!(config.max_age_secs, 86400);
        assert!(!config.secure);
        assert!(!config.http_only);
    }

    #[test]
    fn test_partial_cookie_config_keeps_defaults() {
        let config: CookieConfig =
            serde_json::from_str(r#"{"domain": "sso.example.com", "secure": true}"#).unwrap();

        assert_eq!(config.domain.as_deref(), Some("sso.example.com"));
        assert!(config.secure);
        assert_eq!(config.token_name, "jwt-token");
    }
}
