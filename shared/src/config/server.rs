//! Server configuration module

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    pub workers: usize,

    /// Seconds in-flight requests get to finish after a stop signal
    pub shutdown_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            workers: 0, // Use all CPU cores
            shutdown_timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS configuration
///
/// An empty origin list is permissive in development and denies every
/// cross-origin caller elsewhere.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Allowed origins
    pub allowed_origins: Vec<String>,

    /// Max age for preflight cache in seconds
    pub max_age: Option<usize>,
}

impl CorsConfig {
    /// Whether the origin list is an explicit wildcard
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }

    /// Preflight cache lifetime, defaulting to one hour
    pub fn max_age_secs(&self) -> usize {
        self.max_age.unwrap_or(3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.workers, 0);
        assert_eq!(config.shutdown_timeout_secs, 30);
    }

    #[test]
    fn test_bind_address() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 9000,
            ..Default::default()
        };
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
    }

    #[test]
    fn test_cors_allows_any_origin() {
        assert!(!CorsConfig::default().allows_any_origin());

        let wildcard = CorsConfig {
            allowed_origins: vec!["*".to_string()],
            ..Default::default()
        };
        assert!(wildcard.allows_any_origin());

        let restricted = CorsConfig {
            allowed_origins: vec!["https://app.example.com".to_string()],
            max_age: Some(600),
        };
        assert!(!restricted.allows_any_origin());
        assert_eq!(restricted.max_age_secs(), 600);
    }
}
