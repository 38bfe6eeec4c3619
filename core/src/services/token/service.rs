//! Main token service implementation

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, decode_header, encode, Algorithm, Header, Validation};
use tracing::debug;

use crate::domain::entities::identity::Identity;
use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;
use super::key_material::KeyPair;

/// The only algorithm this service signs with or accepts
pub const SIGNING_ALGORITHM: Algorithm = Algorithm::RS256;

/// Service for issuing and verifying RS256 identity tokens
///
/// Holds only immutable state, so a single instance can be shared behind an
/// `Arc` and used from any number of threads.
#[derive(Debug)]
pub struct TokenService {
    config: TokenServiceConfig,
    keys: KeyPair,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Issuer and lifetimes
    /// * `keys` - Key pair loaded at startup, owned by the service from now on
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or `DomainError::Validation` if the config is unusable
    pub fn new(config: TokenServiceConfig, keys: KeyPair) -> Result<Self, DomainError> {
        config.validate()?;

        let mut validation = Validation::new(SIGNING_ALGORITHM);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "nbf", "sub", "iss"]);
        // The validity window is checked against the caller's clock in `verify_token_at`
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.leeway = 0;

        Ok(Self {
            config,
            keys,
            validation,
        })
    }

    /// Returns the configured issuer
    pub fn issuer(&self) -> &str {
        &self.config.issuer
    }

    /// Issues a token for `identity`, valid from now
    ///
    /// Accepts `&Identity` or `Option<&Identity>`; `None` and the empty user
    /// (id zero) are rejected with `TokenError::InvalidInput`.
    pub fn issue_token<'a, I>(&self, identity: I) -> Result<String, DomainError>
    where
        I: Into<Option<&'a Identity>>,
    {
        self.issue_token_at(identity, Utc::now())
    }

    /// Issues a token as if the current time were `now`
    pub fn issue_token_at<'a, I>(&self, identity: I, now: DateTime<Utc>) -> Result<String, DomainError>
    where
        I: Into<Option<&'a Identity>>,
    {
        let identity = match identity.into() {
            Some(identity) if !identity.is_empty() => identity,
            _ => return Err(TokenError::invalid_input("empty user").into()),
        };

        let claims = self
            .config
            .expiry()
            .zip(self.config.not_before_skew())
            .and_then(|(expiry, skew)| Claims::for_identity(identity, &self.config.issuer, now, expiry, skew))
            .ok_or_else(|| {
                debug!(now = %now, expiry_secs = self.config.expiry_secs, "Token window out of range");
                DomainError::Token(TokenError::TokenGenerationFailed)
            })?;
        self.encode_jwt(&claims)
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(SIGNING_ALGORITHM);
        encode(&header, claims, self.keys.encoding_key()).map_err(|e| {
            debug!(error = %e, "Failed to sign token");
            DomainError::Token(TokenError::TokenGenerationFailed)
        })
    }

    /// Verifies a token and returns the identity it carries
    ///
    /// # Returns
    ///
    /// * `Ok(Identity)` - The token is well formed, RS256, signed by our key and within its window
    /// * `Err(DomainError)` - `TokenError::InvalidToken` for every kind of failure
    pub fn verify_token(&self, token: &str) -> Result<Identity, DomainError> {
        self.verify_token_at(token, Utc::now())
    }

    /// Verifies a token as if the current time were `now`
    pub fn verify_token_at(&self, token: &str, now: DateTime<Utc>) -> Result<Identity, DomainError> {
        let claims = self.decode_claims(token)?;

        if !claims.is_valid_at(now) {
            debug!(
                nbf = claims.nbf,
                exp = claims.exp,
                now = now.timestamp(),
                "Token rejected: outside its validity window"
            );
            return Err(invalid_token());
        }

        claims.into_identity().ok_or_else(|| {
            debug!("Token rejected: subject does not describe an identity");
            invalid_token()
        })
    }

    /// Checks structure, algorithm, signature and issuer; time is not checked here
    pub(crate) fn decode_claims(&self, token: &str) -> Result<Claims, DomainError> {
        let header = decode_header(token).map_err(|e| {
            debug!(error = %e, "Token rejected: malformed header");
            invalid_token()
        })?;

        if header.alg != SIGNING_ALGORITHM {
            debug!(alg = ?header.alg, "Token rejected: unexpected signing algorithm");
            return Err(invalid_token());
        }

        let decoding_key = self.keys.decoding_key().ok_or_else(|| {
            debug!("Token rejected: no verification key loaded");
            invalid_token()
        })?;

        decode::<Claims>(token, decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(error = %e, kind = ?e.kind(), "Token rejected: verification failed");
                invalid_token()
            })
    }
}

fn invalid_token() -> DomainError {
    DomainError::Token(TokenError::InvalidToken)
}
