//! Domain models: outcomes, access policy, events, cache statistics,
//! image metadata and configuration.

pub mod access;
pub mod cache_stats;
pub mod config;
pub mod event;
pub mod image;
pub mod outcome;

pub use access::{AccessOp, AccessPolicy, DEFAULT_DENIED_SUBSTRINGS};
pub use cache_stats::CacheStats;
pub use config::{
    AccessConfig, Config, DatabaseConfig, DatabaseTimings, ImageConfig, LoggingConfig,
};
pub use event::ProxyEvent;
pub use image::{ImageInfo, LoadState};
pub use outcome::{ReadOutcome, WriteOutcome};
