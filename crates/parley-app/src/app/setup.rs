use anyhow::{Context, Result};

use parley_chat::ClientConfig;

use crate::cli::Cli;
use crate::config::{resolve_endpoint, FileConfig};

/// Application configuration derived from CLI arguments, environment and config file
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub client_config: ClientConfig,
    pub verbose: bool,
}

/// Set up application configuration from CLI arguments
pub fn setup_from_cli(cli: &Cli) -> Result<AppConfig> {
    let file = FileConfig::discover(cli.config.as_deref())?;

    // Precedence: --endpoint / PARLEY_ENDPOINT > config file > default
    let endpoint = resolve_endpoint(cli.endpoint.as_deref(), file.as_ref());
    let verbose = cli.verbose || file.as_ref().map(|f| f.verbose).unwrap_or(false);

    let client_config = ClientConfig::new(&endpoint)
        .context("Failed to configure chat endpoint")?
        .with_verbose(verbose);

    Ok(AppConfig {
        client_config,
        verbose,
    })
}
