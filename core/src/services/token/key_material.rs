//! RSA key material for RS256 signing and verification

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::{DomainError, TokenError};

use super::service::SIGNING_ALGORITHM;

/// File name of the PEM-encoded private signing key inside the key directory
pub const PRIVATE_KEY_FILE: &str = "id_rsa";

/// File name of the PEM-encoded public verification key inside the key directory
pub const PUBLIC_KEY_FILE: &str = "id_rsa.pub";

/// RSA signing key and its matching verification key
///
/// Loaded once at startup and owned by a single
/// [`TokenService`](super::TokenService). The verification half is optional:
/// a key pair without it can still issue tokens, but every verification
/// fails.
pub struct KeyPair {
    /// Private key for signing JWTs
    encoding_key: EncodingKey,
    /// Public key for verifying JWTs
    decoding_key: Option<DecodingKey>,
    /// Where the keys came from
    source: PathBuf,
}

#[derive(Serialize, Deserialize)]
struct KeyCheck {
    sub: String,
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("source", &self.source)
            .field("has_verification_key", &self.decoding_key.is_some())
            .finish()
    }
}

impl KeyPair {
    /// Loads `id_rsa` and `id_rsa.pub` from `key_dir`
    ///
    /// # Returns
    ///
    /// * `Ok(KeyPair)` - The private key loaded; the public key may be absent
    /// * `Err(DomainError)` - `TokenError::KeyLoadFailure` when the private key
    ///   is missing or not a PEM RSA private key
    ///
    /// A missing or malformed public key only logs a warning.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sso_core::services::token::KeyPair;
    ///
    /// let keys = KeyPair::load_from_dir("keys").expect("signing key is required");
    /// ```
    pub fn load_from_dir<P: AsRef<Path>>(key_dir: P) -> Result<Self, DomainError> {
        let key_dir = key_dir.as_ref();

        let private_key_path = key_dir.join(PRIVATE_KEY_FILE);
        let private_key_pem = fs::read(&private_key_path).map_err(|e| {
            TokenError::key_load(format!(
                "Failed to read private key {}: {}",
                private_key_path.display(),
                e
            ))
        })?;
        let encoding_key = EncodingKey::from_rsa_pem(&private_key_pem).map_err(|e| {
            TokenError::key_load(format!(
                "Invalid private key format in {}: {}",
                private_key_path.display(),
                e
            ))
        })?;

        let public_key_path = key_dir.join(PUBLIC_KEY_FILE);
        let decoding_key = match fs::read(&public_key_path) {
            Ok(pem) => match DecodingKey::from_rsa_pem(&pem) {
                Ok(key) => Some(key),
                Err(e) => {
                    warn!(
                        path = %public_key_path.display(),
                        error = %e,
                        "Public key is malformed, token verification will fail"
                    );
                    None
                }
            },
            Err(e) => {
                warn!(
                    path = %public_key_path.display(),
                    error = %e,
                    "Public key could not be read, token verification will fail"
                );
                None
            }
        };

        let keys = Self::checked(encoding_key, decoding_key, key_dir.to_path_buf())?;
        info!(
            key_dir = %key_dir.display(),
            has_verification_key = keys.has_verification_key(),
            "Loaded token signing keys"
        );
        Ok(keys)
    }

    /// Creates a key pair from PEM bytes (useful for testing or embedded keys)
    ///
    /// Unlike [`load_from_dir`](Self::load_from_dir), a public key that is
    /// supplied but malformed is an error here.
    pub fn from_pem(private_key_pem: &[u8], public_key_pem: Option<&[u8]>) -> Result<Self, DomainError> {
        let encoding_key = EncodingKey::from_rsa_pem(private_key_pem)
            .map_err(|e| TokenError::key_load(format!("Invalid private key format: {}", e)))?;

        let decoding_key = public_key_pem
            .map(DecodingKey::from_rsa_pem)
            .transpose()
            .map_err(|e| TokenError::key_load(format!("Invalid public key format: {}", e)))?;

        Self::checked(encoding_key, decoding_key, PathBuf::from("memory"))
    }

    /// Signs a throwaway token so an unusable private key fails here rather than
    /// on the first issuance
    fn checked(
        encoding_key: EncodingKey,
        decoding_key: Option<DecodingKey>,
        source: PathBuf,
    ) -> Result<Self, DomainError> {
        let check = KeyCheck {
            sub: "key-check".to_string(),
        };
        let token = encode(&Header::new(SIGNING_ALGORITHM), &check, &encoding_key).map_err(|e| {
            TokenError::key_load(format!(
                "Private key from {} cannot sign: {}",
                source.display(),
                e
            ))
        })?;

        if let Some(decoding_key) = &decoding_key {
            let mut validation = Validation::new(SIGNING_ALGORITHM);
            validation.required_spec_claims.clear();
            validation.validate_exp = false;
            if let Err(e) = decode::<KeyCheck>(&token, decoding_key, &validation) {
                warn!(
                    source = %source.display(),
                    error = %e,
                    "Public key does not match the private key, token verification will fail"
                );
            }
        }

        Ok(Self {
            encoding_key,
            decoding_key,
            source,
        })
    }

    /// Returns the encoding key for signing JWTs
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    /// Returns the decoding key for verifying JWTs, if one was loaded
    pub fn decoding_key(&self) -> Option<&DecodingKey> {
        self.decoding_key.as_ref()
    }

    /// Whether tokens can be verified with this key pair
    pub fn has_verification_key(&self) -> bool {
        self.decoding_key.is_some()
    }

    /// Directory the keys were read from, or `memory`
    pub fn source(&self) -> &Path {
        &self.source
    }
}
