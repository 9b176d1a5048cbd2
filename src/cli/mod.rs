//! Command-line interface.

pub mod commands;
pub mod output;
pub mod types;

use anyhow::Result;

pub use types::{Cli, Commands};

use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;

/// Resolve the configuration the CLI flags ask for
pub fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    Ok(if cli.fast { config.without_delays() } else { config })
}

/// Dispatch a parsed command
pub async fn dispatch(cli: &Cli, config: Config) -> Result<()> {
    match cli.command.scenario() {
        Some(scenario) => commands::scenario::execute(scenario, config, cli.json).await,
        None => commands::config::execute(config, cli.json),
    }
}

/// Print an error and exit with status 1
pub fn handle_error(err: anyhow::Error, json: bool) -> ! {
    if json {
        let chain: Vec<String> = err.chain().map(ToString::to_string).collect();
        let body = serde_json::json!({
            "error": err.to_string(),
            "causes": chain.get(1..).unwrap_or_default(),
        });
        eprintln!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("{} {err:#}", console::style("error:").red().bold());
    }
    std::process::exit(1);
}
