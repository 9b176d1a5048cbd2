//! `proxykit config`: print the effective configuration.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;

/// Effective configuration rendered by the CLI
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ConfigOutput(pub Config);

impl CommandOutput for ConfigOutput {
    fn to_human(&self) -> String {
        serde_yaml::to_string(&self.0).unwrap_or_else(|e| format!("<unrenderable config: {e}>"))
    }
}

/// Handle config command
pub fn execute(config: Config, json: bool) -> Result<()> {
    output(&ConfigOutput(config), json);
    Ok(())
}
