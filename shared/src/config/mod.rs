//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Signing keys, token lifetime and cookie transport
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration
//!
//! [`AppConfig::load`] layers, lowest precedence first: built-in defaults for
//! the detected environment, `config/default.toml`, `config/<environment>.toml`
//! and `SSO__`-prefixed environment variables (`SSO__AUTH__KEY_DIR=/etc/sso`).

pub mod auth;
pub mod environment;
pub mod server;

use std::path::Path;

use config::{Config, ConfigError, File, Map};
use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::{AuthConfig, CookieConfig};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};

/// Directory searched for configuration files, relative to the working directory
pub const CONFIG_DIR: &str = "config";

/// Prefix of environment variables overriding configuration
pub const ENV_PREFIX: &str = "SSO";

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Signing keys and token lifetime
    pub auth: AuthConfig,

    /// Token and login-user cookies
    pub cookie: CookieConfig,

    /// CORS configuration
    pub cors: CorsConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Built-in defaults for an environment
    pub fn for_environment(environment: Environment) -> Self {
        let mut config = Self {
            environment,
            logging: LoggingConfig::for_environment(environment),
            ..Default::default()
        };
        if environment.is_production() {
            config.cookie.secure = true;
        }
        config
    }

    /// Load configuration for the environment named by `ENVIRONMENT`
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(CONFIG_DIR, Environment::from_env(), None)
    }

    /// Load configuration from `config_dir`
    ///
    /// `env_vars` replaces the process environment when given, so callers can
    /// supply overrides without touching global state.
    pub fn load_from(
        config_dir: impl AsRef<Path>,
        environment: Environment,
        env_vars: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let settings = Config::builder()
            .add_source(Config::try_from(&Self::for_environment(environment))?)
            .add_source(File::from(config_dir.join("default")).required(false))
            .add_source(File::from(config_dir.join(environment.config_name())).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .source(env_vars),
            )
            .build()?;

        let mut config: AppConfig = settings.try_deserialize()?;
        config.environment = environment;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn vars(pairs: &[(&str, &str)]) -> Option<Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_defaults_without_files() {
        let dir = tempfile::tempdir().unwrap();

        let config = AppConfig::load_from(dir.path(), Environment::Development, vars(&[])).unwrap();

        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.auth.issuer, "jwt-sso.local");
        assert_eq!(config.auth.token_expiry_secs, 604800);
        assert_eq!(config.cookie.token_name, "jwt-token");
        assert_eq!(config.cookie.domain, None);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_production_defaults_secure_cookies() {
        let config = AppConfig::for_environment(Environment::Production);

        assert!(config.cookie.secure);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_environment_file_overrides_default_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[auth]\nissuer = \"sso.example.com\"\nkey_dir = \"/etc/sso/keys\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("staging.toml"),
            "[auth]\nissuer = \"staging.sso.example.com\"\n\n[cookie]\ndomain = \"example.com\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from(dir.path(), Environment::Staging, vars(&[])).unwrap();

        assert_eq!(config.auth.issuer, "staging.sso.example.com");
        assert_eq!(config.auth.key_dir, "/etc/sso/keys");
        assert_eq!(config.cookie.domain.as_deref(), Some("example.com"));
        assert_eq!(config.cookie.path, "/");
    }

    #[test]
    fn test_environment_variables_override_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), "[server]\nport = 9000\n").unwrap();

        let config = AppConfig::load_from(
            dir.path(),
            Environment::Development,
            vars(&[
                ("SSO__SERVER__PORT", "9100"),
                ("SSO__SERVER__SHUTDOWN_TIMEOUT_SECS", "5"),
                ("SSO__AUTH__TOKEN_EXPIRY_SECS", "60"),
                ("SSO__CORS__ALLOWED_ORIGINS", "https://a.example.com,https://b.example.com"),
            ]),
        )
        .unwrap();

        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.shutdown_timeout_secs, 5);
        assert_eq!(config.auth.token_expiry_secs, 60);
        assert_eq!(
            config.cors.allowed_origins,
            vec!["https://a.example.com", "https://b.example.com"]
        );
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), "[server]\nport = \"not-a-port\"\n").unwrap();

        let result = AppConfig::load_from(dir.path(), Environment::Development, vars(&[]));

        assert!(result.is_err());
    }
}
