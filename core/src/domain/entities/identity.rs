//! The authenticated subject carried inside a token.

use serde::{Deserialize, Serialize};

/// Identity bound to a token: a caller-assigned numeric id, a display name
/// and an optional email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Caller-assigned user id; zero means "no user"
    pub id: u64,

    /// Display name (free text, may be empty)
    pub name: String,

    /// Email address, if the client supplied one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Identity {
    /// Creates an identity without an email
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: None,
        }
    }

    /// Attaches an email to the identity
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// An identity with id zero is the empty user and cannot be issued a token
    pub fn is_empty(&self) -> bool {
        self.id == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_builder() {
        let identity = Identity::new(42, "alice").with_email("a@x.com");

        assert_eq!(identity.id, 42);
        assert_eq!(identity.name, "alice");
        assert_eq!(identity.email.as_deref(), Some("a@x.com"));
        assert!(!identity.is_empty());
    }

    #[test]
    fn test_zero_id_is_empty() {
        assert!(Identity::new(0, "nobody").is_empty());
    }

    #[test]
    fn test_identity_json_omits_missing_email() {
        let json = serde_json::to_value(Identity::new(7, "bob")).unwrap();

        assert_eq!(json, serde_json::json!({ "id": 7, "name": "bob" }));
    }

    #[test]
    fn test_identity_json_accepts_missing_email() {
        let identity: Identity = serde_json::from_str(r#"{"id":7,"name":"bob"}"#).unwrap();

        assert_eq!(identity, Identity::new(7, "bob"));
    }
}
