use serde::{Deserialize, Serialize};
use validator::Validate;

/// Hint returned alongside every issued token
pub const TOKEN_USAGE_HINT: &str = "set token in Authorization Header, [Authorization: Bearer {token}]";

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Display name carried in the token
    #[validate(length(min = 1, max = 128))]
    pub name: String,

    #[validate(email)]
    #[serde(default)]
    pub email: Option<String>,

    /// Also deliver the token and login user as cookies
    #[serde(default)]
    pub set_cookie: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    pub describe: String,
}

impl TokenResponse {
    pub fn new(token: String) -> Self {
        Self {
            token,
            describe: TOKEN_USAGE_HINT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_validation() {
        let valid: LoginRequest = serde_json::from_str(r#"{"name": "alice", "email": "a@x.com"}"#).unwrap();
        assert!(valid.validate().is_ok());
        assert!(!valid.set_cookie);

        let no_email: LoginRequest = serde_json::from_str(r#"{"name": "bob"}"#).unwrap();
        assert!(no_email.validate().is_ok());

        let empty_name: LoginRequest = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert!(empty_name.validate().is_err());

        let bad_email: LoginRequest =
            serde_json::from_str(r#"{"name": "carol", "email": "not-an-email"}"#).unwrap();
        assert!(bad_email.validate().is_err());

        let long_name = LoginRequest {
            name: "x".repeat(129),
            email: None,
            set_cookie: false,
        };
        assert!(long_name.validate().is_err());
    }
}
