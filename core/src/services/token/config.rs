//! Configuration for the token service

use chrono::Duration;

use crate::domain::entities::token::{
    DEFAULT_ISSUER, DEFAULT_TOKEN_EXPIRY_SECS, MAX_TOKEN_EXPIRY_SECS, NOT_BEFORE_SKEW_SECS,
};
use crate::errors::DomainError;

/// Configuration for the token service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenServiceConfig {
    /// Value written to and required in the `iss` claim
    pub issuer: String,
    /// Token lifetime in seconds
    pub expiry_secs: i64,
    /// Backdating of `nbf` in seconds
    pub not_before_skew_secs: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            issuer: DEFAULT_ISSUER.to_string(),
            expiry_secs: DEFAULT_TOKEN_EXPIRY_SECS,
            not_before_skew_secs: NOT_BEFORE_SKEW_SECS,
        }
    }
}

impl TokenServiceConfig {
    /// Creates a configuration for the given issuer with default lifetimes
    pub fn new(issuer: impl Into<String>) -> Self {
        Self {
            issuer: issuer.into(),
            ..Default::default()
        }
    }

    /// Set token lifetime in seconds
    pub fn with_expiry_secs(mut self, secs: i64) -> Self {
        self.expiry_secs = secs;
        self
    }

    /// Token lifetime, `None` if out of range
    pub fn expiry(&self) -> Option<Duration> {
        Duration::try_seconds(self.expiry_secs)
    }

    /// Backdating applied to `nbf`, `None` if out of range
    pub fn not_before_skew(&self) -> Option<Duration> {
        Duration::try_seconds(self.not_before_skew_secs)
    }

    pub(crate) fn validate(&self) -> Result<(), DomainError> {
        if self.issuer.is_empty() {
            return Err(DomainError::Validation {
                message: "issuer must not be empty".to_string(),
            });
        }
        if !(1..=MAX_TOKEN_EXPIRY_SECS).contains(&self.expiry_secs) {
            return Err(DomainError::Validation {
                message: format!(
                    "token expiry must be between 1 and {}s, got {}s",
                    MAX_TOKEN_EXPIRY_SECS, self.expiry_secs
                ),
            });
        }
        if !(0..=MAX_TOKEN_EXPIRY_SECS).contains(&self.not_before_skew_secs) {
            return Err(DomainError::Validation {
                message: format!(
                    "not-before skew must be between 0 and {}s, got {}s",
                    MAX_TOKEN_EXPIRY_SECS, self.not_before_skew_secs
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_service_config_default() {
        let config = TokenServiceConfig::default();
        assert_eq!(config.issuer, DEFAULT_ISSUER);
        assert_eq!(config.expiry_secs, 604800);
        assert_eq!(config.not_before_skew_secs, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_token_service_config_builder() {
        let config = TokenServiceConfig::new("sso.example.com").with_expiry_secs(3600);

        assert_eq!(config.issuer, "sso.example.com");
        assert_eq!(config.expiry(), Some(Duration::hours(1)));
        assert_eq!(config.not_before_skew(), Some(Duration::seconds(1000)));
    }

    #[test]
    fn test_token_service_config_rejects_non_positive_expiry() {
        let config = TokenServiceConfig::default().with_expiry_secs(0);
        assert!(matches!(config.validate(), Err(DomainError::Validation { .. })));
    }

    #[test]
    fn test_token_service_config_rejects_excessive_expiry() {
        let at_limit = TokenServiceConfig::default().with_expiry_secs(MAX_TOKEN_EXPIRY_SECS);
        assert!(at_limit.validate().is_ok());

        for secs in [MAX_TOKEN_EXPIRY_SECS + 1, i64::MAX / 2, i64::MAX] {
            let config = TokenServiceConfig::default().with_expiry_secs(secs);
            assert!(matches!(config.validate(), Err(DomainError::Validation { .. })));
        }
        assert_eq!(TokenServiceConfig::default().with_expiry_secs(i64::MAX).expiry(), None);
    }

    #[test]
    fn test_token_service_config_rejects_excessive_skew() {
        let config = TokenServiceConfig {
            not_before_skew_secs: i64::MAX,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(DomainError::Validation { .. })));
    }

    #[test]
    fn test_token_service_config_rejects_negative_skew() {
        let config = TokenServiceConfig {
            not_before_skew_secs: -1,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(DomainError::Validation { .. })));
    }

    #[test]
    fn test_token_service_config_rejects_empty_issuer() {
        let config = TokenServiceConfig::new("");
        assert!(matches!(config.validate(), Err(DomainError::Validation { .. })));
    }
}
