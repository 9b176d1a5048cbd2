//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::services::Scenario;

/// Top-level command line
#[derive(Parser)]
#[command(name = "proxykit")]
#[command(about = "proxykit - caching, access-control and lazy-loading proxies", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Load configuration from this YAML file instead of .proxykit/
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip all simulated delays
    #[arg(long, global = true)]
    pub fast: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Run both the database and the image scenario
    Run,

    /// Run the caching / access-control database scenario
    Database,

    /// Run the lazy-loading image scenario
    Images,

    /// Show the effective configuration
    Config,
}

impl Commands {
    /// Scenario this command runs, if it runs one
    pub const fn scenario(&self) -> Option<Scenario> {
        match self {
            Self::Run => Some(Scenario::All),
            Self::Database => Some(Scenario::Database),
            Self::Images => Some(Scenario::Images),
            Self::Config => None,
        }
    }
}
