//! Token entities for JWT-based single sign-on.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::identity::Identity;

/// Default token lifetime (7 days)
pub const DEFAULT_TOKEN_EXPIRY_SECS: i64 = 7 * 24 * 60 * 60;

/// How far `nbf` is backdated to tolerate clock skew between issuer and verifier
pub const NOT_BEFORE_SKEW_SECS: i64 = 1000;

/// Longest accepted token lifetime (10 years)
pub const MAX_TOKEN_EXPIRY_SECS: i64 = 10 * 365 * 24 * 60 * 60;

/// JWT issuer used when none is configured
pub const DEFAULT_ISSUER: &str = "jwt-sso.local";

/// Claims structure for JWT payload
///
/// The registered fields are always written. Custom fields follow the two
/// historical schemas (with and without `email`); missing custom fields
/// decode to their defaults and unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id, string-encoded)
    pub sub: String,

    /// Issuer
    pub iss: String,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issued at timestamp
    #[serde(default)]
    pub iat: i64,

    /// JWT ID, equal to the subject
    pub jti: String,

    /// Numeric user id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Email, when the identity has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Claims {
    /// Builds the claim set for `identity` issued at `issued_at`
    ///
    /// `nbf` is backdated by `skew` and `exp` is `issued_at + expiry`.
    /// Returns `None` when either instant falls outside the representable range.
    pub fn for_identity(
        identity: &Identity,
        issuer: &str,
        issued_at: DateTime<Utc>,
        expiry: Duration,
        skew: Duration,
    ) -> Option<Self> {
        let subject = identity.id.to_string();
        let exp = issued_at.checked_add_signed(expiry)?;
        let nbf = issued_at.checked_sub_signed(skew)?;

        Some(Self {
            sub: subject.clone(),
            iss: issuer.to_string(),
            exp: exp.timestamp(),
            nbf: nbf.timestamp(),
            iat: issued_at.timestamp(),
            jti: subject,
            id: Some(identity.id),
            name: identity.name.clone(),
            email: identity.email.clone(),
        })
    }

    /// `true` while `nbf <= now < exp`
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        let now = now.timestamp();
        now >= self.nbf && now < self.exp
    }

    /// Reconstructs the identity described by these claims
    ///
    /// Returns `None` when the subject is not a non-zero integer or when the
    /// numeric `id` field disagrees with the subject.
    pub fn into_identity(self) -> Option<Identity> {
        let id: u64 = self.sub.parse().ok()?;
        if id == 0 {
            return None;
        }
        if self.id.is_some_and(|claimed| claimed != id) {
            return None;
        }

        Some(Identity {
            id,
            name: self.name,
            email: self.email,
        })
    }
}
