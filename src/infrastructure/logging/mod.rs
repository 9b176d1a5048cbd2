//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Pretty or JSON console output on stderr
//! - JSON log files with rotation via tracing-appender
pub mod config;
pub mod logger;

pub use config::{LogConfig, LogFormat, RotationPolicy};
pub use logger::{debug, error, info, instrument, trace, warn, LoggerImpl, LOG_FILE_NAME};
