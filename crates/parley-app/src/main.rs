use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io;

use parley::{run_message_mode, run_repl_mode, setup_from_cli, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Some(shell) = cli.generate {
        let mut command = Cli::command();
        clap_complete::generate(shell, &mut command, "parley", &mut io::stdout());
        return Ok(());
    }

    let app_config = setup_from_cli(&cli)?;
    init_logging(app_config.verbose);

    if let Some(message) = cli.message.as_deref() {
        return run_message_mode(app_config, message).await;
    }

    run_repl_mode(app_config).await
}

/// Diagnostics stay off the chat surface unless asked for via RUST_LOG or --verbose
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "off" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
