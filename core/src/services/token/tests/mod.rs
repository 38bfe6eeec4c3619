//! Unit tests for the token service


use std::path::PathBuf;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

use super::{KeyPair, TokenService, TokenServiceConfig};

/// Directory holding the service's own RSA key pair
fn fixture_key_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/keys")
}

/// Directory holding an unrelated RSA key pair
fn foreign_key_dir() -> PathBuf {
    fixture_key_dir().join("foreign")
}

fn service_with_keys(config: TokenServiceConfig, key_dir: PathBuf) -> TokenService {
    let keys = KeyPair::load_from_dir(key_dir).expect("Failed to load fixture keys");
    TokenService::new(config, keys).expect("Failed to create token service")
}

fn create_test_service() -> TokenService {
    service_with_keys(TokenServiceConfig::default(), fixture_key_dir())
}

/// Splits a compact token into its three segments
fn split_token(token: &str) -> (String, String, String) {
    let parts: Vec<&str> = token.split('.').collect();
    assert_eq!(parts.len(), 3, "token must have three segments");
    (parts[0].to_string(), parts[1].to_string(), parts[2].to_string())
}

fn decode_segment(segment: &str) -> serde_json::Value {
    let bytes = URL_SAFE_NO_PAD.decode(segment).expect("segment is base64url");
    serde_json::from_slice(&bytes).expect("segment is JSON")
}

fn encode_segment(value: &serde_json::Value) -> String {
    URL_SAFE_NO_PAD.encode(serde_json::to_vec(value).expect("value serializes"))
}
