//! proxykit CLI entry point.

use clap::Parser;

use proxykit::cli::{self, Cli};
use proxykit::infrastructure::logging::{LogConfig, LoggerImpl};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    let config = match cli::load_config(&cli) {
        Ok(config) => config,
        Err(err) => cli::handle_error(err, json),
    };

    let _logger = match LoggerImpl::init(&LogConfig::from(&config.logging)) {
        Ok(logger) => logger,
        Err(err) => cli::handle_error(err, json),
    };

    if let Err(err) = cli::dispatch(&cli, config).await {
        cli::handle_error(err, json);
    }
}
