//! Configuration model loaded by the infrastructure layer.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::access::{AccessPolicy, DEFAULT_DENIED_SUBSTRINGS};

/// Main configuration structure for proxykit
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Simulated database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Simulated image loader configuration
    #[serde(default)]
    pub images: ImageConfig,

    /// Key denylist configuration
    #[serde(default)]
    pub access: AccessConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Same configuration with every simulated delay set to zero.
    pub fn without_delays(mut self) -> Self {
        self.database.connect_delay_ms = 0;
        self.database.query_delay_ms = 0;
        self.database.write_delay_ms = 0;
        self.images.load_delay_ms = 0;
        self
    }
}

/// Simulated database configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct DatabaseConfig {
    /// Descriptor handed to the backing store on connect
    #[serde(default = "default_connection_string")]
    pub connection_string: String,

    /// Simulated connection setup time
    #[serde(default = "default_connect_delay_ms")]
    pub connect_delay_ms: u64,

    /// Simulated query time
    #[serde(default = "default_io_delay_ms")]
    pub query_delay_ms: u64,

    /// Simulated write time
    #[serde(default = "default_io_delay_ms")]
    pub write_delay_ms: u64,
}

fn default_connection_string() -> String {
    "server=localhost;db=test".to_string()
}

const fn default_connect_delay_ms() -> u64 {
    2000
}

const fn default_io_delay_ms() -> u64 {
    1000
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            connection_string: default_connection_string(),
            connect_delay_ms: default_connect_delay_ms(),
            query_delay_ms: default_io_delay_ms(),
            write_delay_ms: default_io_delay_ms(),
        }
    }
}

impl DatabaseConfig {
    /// Delays as durations.
    pub const fn timings(&self) -> DatabaseTimings {
        DatabaseTimings {
            connect: Duration::from_millis(self.connect_delay_ms),
            query: Duration::from_millis(self.query_delay_ms),
            write: Duration::from_millis(self.write_delay_ms),
        }
    }
}

/// Simulated latencies of the backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatabaseTimings {
    /// Connection setup
    pub connect: Duration,
    /// Single query
    pub query: Duration,
    /// Single write
    pub write: Duration,
}

impl DatabaseTimings {
    /// No latency at all.
    pub const fn zero() -> Self {
        Self {
            connect: Duration::ZERO,
            query: Duration::ZERO,
            write: Duration::ZERO,
        }
    }
}

impl Default for DatabaseTimings {
    fn default() -> Self {
        DatabaseConfig::default().timings()
    }
}

/// Simulated image loader configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct ImageConfig {
    /// Simulated time to load an image from disk
    #[serde(default = "default_load_delay_ms")]
    pub load_delay_ms: u64,
}

const fn default_load_delay_ms() -> u64 {
    1500
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            load_delay_ms: default_load_delay_ms(),
        }
    }
}

impl ImageConfig {
    /// Load delay as a duration.
    pub const fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }
}

/// Key denylist configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct AccessConfig {
    /// Keys containing any of these substrings are refused
    #[serde(default = "default_denied_substrings")]
    pub denied_substrings: Vec<String>,
}

fn default_denied_substrings() -> Vec<String> {
    DEFAULT_DENIED_SUBSTRINGS.iter().map(ToString::to_string).collect()
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            denied_substrings: default_denied_substrings(),
        }
    }
}

impl AccessConfig {
    /// Access policy built from this section.
    pub fn policy(&self) -> AccessPolicy {
        AccessPolicy::new(self.denied_substrings.iter().cloned())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for a rolling JSON log file; console only when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,

    /// Log file rotation: daily, hourly, never
    #[serde(default = "default_log_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_log_rotation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timings() {
        let timings = DatabaseTimings::default();
        assert_eq!(timings.connect, Duration::from_secs(2));
        assert_eq!(timings.query, Duration::from_secs(1));
        assert_eq!(timings.write, Duration::from_secs(1));
        assert_eq!(ImageConfig::default().load_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn test_without_delays() {
        let config = Config::default().without_delays();
        assert_eq!(config.database.timings(), DatabaseTimings::zero());
        assert_eq!(config.images.load_delay(), Duration::ZERO);
        assert_eq!(config.database.connection_string, "server=localhost;db=test");
    }

    #[test]
    fn test_access_policy_from_config() {
        let policy = AccessConfig::default().policy();
        assert!(policy.is_restricted("admin_password"));
        assert!(!policy.is_restricted("users"));
    }
}
