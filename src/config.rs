//! Configuration Module
//!
//! Provides configuration management for the login service.
//! Handles loading and parsing of YAML configuration files and environment variables.
//! Environment variables prefixed with `APP_` override file values, with `__`
//! separating nested keys (e.g. `APP_AUTH__MAX_CREDENTIAL_LENGTH`).

use std::path::Path;

use config::{Config as ConfigFile, Environment, File, FileFormat};
use serde::Deserialize;
use thiserror::Error;

use crate::db::UserRecord;

/// Default location of the configuration file, without extension
pub const DEFAULT_CONFIG_PATH: &str = "config/application";

/// Application metadata configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Application {
    /// Name of the application
    pub name: String,
}

impl Default for Application {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. "info", "login_app=debug")
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Longest accepted email or password, in bytes. Unbounded when unset.
    pub max_credential_length: Option<usize>,
}

/// Application configuration settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Application metadata
    #[serde(default)]
    pub application: Application,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// User records served by the in-memory store
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    ParseError(String),
    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

impl Config {
    /// Loads configuration from the default location.
    ///
    /// # Configuration Sources
    /// Configuration is loaded in the following order (later sources override earlier ones):
    /// 1. Base configuration (`config/application.yml`, optional)
    /// 2. Environment variables (prefixed with `APP_`)
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Loads configuration from `path`, or from the default location when `None`.
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_PATH).required(false),
        };

        let builder = ConfigFile::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::build(builder)
    }

    /// Parses configuration from a YAML string, without environment overrides.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let builder = ConfigFile::builder().add_source(File::from_str(yaml, FileFormat::Yaml));
        Self::build(builder)
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialize fine but make no sense.
    ///
    /// Every configured user must fit within `auth.max_credential_length`,
    /// otherwise that user could never log in.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limit = self.auth.max_credential_length;
        if limit == Some(0) {
            return Err(ConfigError::InvalidValue(
                "auth.max_credential_length must be greater than zero".into(),
            ));
        }

        for (index, user) in self.users.iter().enumerate() {
            if user.email.is_empty() {
                return Err(ConfigError::InvalidValue(format!("users[{index}].email is empty")));
            }
            if user.password.is_empty() {
                return Err(ConfigError::InvalidValue(format!("users[{index}].password is empty")));
            }
            if user.display_name.is_empty() {
                return Err(ConfigError::InvalidValue(format!(
                    "users[{index}].display_name is empty"
                )));
            }
            if let Some(limit) = limit {
                if user.email.len() > limit || user.password.len() > limit {
                    return Err(ConfigError::InvalidValue(format!(
                        "users[{index}] exceeds auth.max_credential_length ({limit} bytes)"
                    )));
                }
            }
        }

        Ok(())
    }

    /// Returns the authentication configuration.
    pub fn auth(&self) -> &AuthConfig {
        &self.auth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
application:
  name: login-test
logging:
  level: debug
  format: json
auth:
  max_credential_length: 256
users:
  - email: johndoe@example.com
    password: password123
    display_name: John Doe
  - email: janesmith@example.com
    password: securepass456
    display_name: Jane Smith
"#;

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_yaml_str(SAMPLE).unwrap();

        assert_eq!(config.application.name, "login-test");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.auth().max_credential_length, Some(256));
        assert_eq!(config.users.len(), 2);
        assert_eq!(config.users[0].display_name, "John Doe");
    }

    #[test]
    fn test_defaults_for_missing_sections() {
        let config = Config::from_yaml_str("application:\n  name: bare\n").unwrap();

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.auth.max_credential_length, None);
        assert!(config.users.is_empty());
    }

    #[test]
    fn test_zero_length_limit_rejected() {
        let err = Config::from_yaml_str("auth:\n  max_credential_length: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_user_longer_than_limit_rejected() {
        let yaml = format!(
            "auth:\n  max_credential_length: 64\nusers:\n  - email: {}@example.com\n    password: pw\n    display_name: Long\n",
            "c".repeat(200)
        );
        let err = Config::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
        assert!(err.to_string().contains("users[0] exceeds auth.max_credential_length"));
    }

    #[test]
    fn test_env_overrides_file() {
        const KEY: &str = "APP_AUTH__MAX_CREDENTIAL_LENGTH";
        let previous = std::env::var(KEY).ok();
        std::env::set_var(KEY, "77");

        let loaded = Config::load(None);

        match previous {
            Some(value) => std::env::set_var(KEY, value),
            None => std::env::remove_var(KEY),
        }
        assert_eq!(loaded.unwrap().auth.max_credential_length, Some(77));
    }

    #[test]
    fn test_incomplete_user_rejected() {
        let yaml = "users:\n  - email: a@example.com\n    password: ''\n    display_name: A\n";
        let err = Config::from_yaml_str(yaml).unwrap_err();
        assert!(err.to_string().contains("users[0].password"));
    }

    #[test]
    fn test_user_missing_field_is_parse_error() {
        let yaml = "users:\n  - email: a@example.com\n    display_name: A\n";
        let err = Config::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let err = Config::load(Some(Path::new("does/not/exist.yml"))).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
