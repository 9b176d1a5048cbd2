//! CLI command implementations.

/// Configuration display
pub mod config;
/// Scenario execution
pub mod scenario;
