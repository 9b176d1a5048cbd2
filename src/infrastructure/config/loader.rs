//! Hierarchical configuration loading with figment.

use anyhow::{bail, Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use thiserror::Error;

use crate::domain::models::config::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Blank `database.connection_string`
    #[error("Connection string cannot be empty")]
    EmptyConnectionString,

    /// Empty entry in `access.denied_substrings`, by index
    #[error("Denied substring #{0} is empty and would deny every key")]
    EmptyDeniedSubstring(usize),

    /// Unknown `logging.level`
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unknown `logging.format`
    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    /// Unknown `logging.rotation`
    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidLogRotation(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .proxykit/config.yaml (project config)
    /// 3. .proxykit/local.yaml (project local overrides, optional)
    /// 4. Environment variables (PROXYKIT_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Self::figment()
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, still honoring env overrides
    ///
    /// Unlike the project files picked up by [`ConfigLoader::load`], an
    /// explicit path must exist.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        if !path.as_ref().is_file() {
            bail!("Config file not found: {}", path.as_ref().display());
        }

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed("PROXYKIT_").split("__"))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".proxykit/config.yaml"))
            .merge(Yaml::file(".proxykit/local.yaml"))
            .merge(Env::prefixed("PROXYKIT_").split("__"))
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.database.connection_string.trim().is_empty() {
            return Err(ConfigError::EmptyConnectionString);
        }

        if let Some(index) = config
            .access
            .denied_substrings
            .iter()
            .position(String::is_empty)
        {
            return Err(ConfigError::EmptyDeniedSubstring(index));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidLogRotation(config.logging.rotation.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::config::{AccessConfig, LoggingConfig};
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.database.connection_string, "server=localhost;db=test");
        assert_eq!(config.database.connect_delay_ms, 2000);
        assert_eq!(config.images.load_delay_ms, 1500);
        assert_eq!(config.access.denied_substrings, vec!["admin", "secret"]);
        assert_eq!(config.logging.level, "info");
        ConfigLoader::validate(&config).expect("Default config should be valid");
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r"
database:
  connection_string: server=db.internal;db=prod
  query_delay_ms: 5
images:
  load_delay_ms: 10
access:
  denied_substrings: [internal]
logging:
  level: debug
  format: json
";

        let config: Config = serde_yaml::from_str(yaml).expect("YAML should parse");

        assert_eq!(config.database.connection_string, "server=db.internal;db=prod");
        assert_eq!(config.database.query_delay_ms, 5);
        assert_eq!(config.database.connect_delay_ms, 2000);
        assert_eq!(config.images.load_delay_ms, 10);
        assert_eq!(config.access.denied_substrings, vec!["internal"]);
        assert_eq!(config.logging.format, "json");

        ConfigLoader::validate(&config).expect("Parsed config should be valid");
    }

    #[test]
    fn test_validate_empty_connection_string() {
        let mut config = Config::default();
        config.database.connection_string = "   ".to_string();

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::EmptyConnectionString)
        ));
    }

    #[test]
    fn test_validate_empty_denied_substring() {
        let config = Config {
            access: AccessConfig {
                denied_substrings: vec!["admin".to_string(), String::new()],
            },
            ..Default::default()
        };

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::EmptyDeniedSubstring(1))
        ));
    }

    #[test]
    fn test_validate_empty_denylist_is_allowed() {
        let config = Config {
            access: AccessConfig {
                denied_substrings: vec![],
            },
            ..Default::default()
        };
        assert!(ConfigLoader::validate(&config).is_ok());
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let config = Config {
            logging: LoggingConfig {
                level: "verbose".to_string(),
                format: "json".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        let err = ConfigLoader::validate(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(ref l) if l == "verbose"));
    }

    #[test]
    fn test_validate_invalid_log_format() {
        let config = Config {
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "xml".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogFormat(_))
        ));
    }

    #[test]
    fn test_validate_invalid_log_rotation() {
        let mut config = Config::default();
        config.logging.rotation = "weekly".to_string();

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogRotation(ref r)) if r == "weekly"
        ));
    }

    #[test]
    fn test_env_sets_log_dir() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "logging:\n  rotation: hourly").unwrap();

        let config = temp_env::with_vars(
            [
                ("PROXYKIT_LOGGING__LOG_DIR", Some("/tmp/proxykit-logs")),
                ("PROXYKIT_LOGGING__ROTATION", None),
            ],
            || ConfigLoader::load_from_file(file.path()),
        )
        .unwrap();

        assert_eq!(
            config.logging.log_dir.as_deref(),
            Some(std::path::Path::new("/tmp/proxykit-logs"))
        );
        assert_eq!(config.logging.rotation, "hourly");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "database:\n  connection_string: server=file;db=x\nimages:\n  load_delay_ms: 0"
        )
        .unwrap();

        let config = temp_env::with_vars_unset(
            ["PROXYKIT_DATABASE__CONNECTION_STRING", "PROXYKIT_IMAGES__LOAD_DELAY_MS"],
            || ConfigLoader::load_from_file(file.path()),
        )
        .unwrap();

        assert_eq!(config.database.connection_string, "server=file;db=x");
        assert_eq!(config.images.load_delay_ms, 0);
        assert_eq!(config.database.query_delay_ms, 1000);
    }

    #[test]
    fn test_env_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "images:\n  load_delay_ms: 7").unwrap();

        let config = temp_env::with_var("PROXYKIT_IMAGES__LOAD_DELAY_MS", Some("42"), || {
            ConfigLoader::load_from_file(file.path())
        })
        .unwrap();

        assert_eq!(config.images.load_delay_ms, 42);
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.yaml");

        let err = ConfigLoader::load_from_file(&missing).unwrap_err();
        assert!(err.to_string().contains("absent.yaml"));
    }

    #[test]
    fn test_load_from_file_rejects_invalid_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "logging:\n  level: loud").unwrap();

        let result = temp_env::with_var_unset("PROXYKIT_LOGGING__LEVEL", || {
            ConfigLoader::load_from_file(file.path())
        });
        assert!(result.is_err());
    }
}
