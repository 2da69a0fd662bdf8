use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// CLI arguments for parley
#[derive(Parser, Debug)]
#[command(name = "parley")]
#[command(about = "Parley - terminal chat client for /chat/invoke endpoints")]
#[command(version)]
pub struct Cli {
    /// Base URL of the chat endpoint (default: http://localhost:8000)
    #[arg(long, value_name = "URL", env = "PARLEY_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Path to a TOML config file (default: ./parley.toml if present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Send a single message, print the reply and exit
    #[arg(short, long, value_name = "TEXT")]
    pub message: Option<String>,

    /// Enable verbose debug output (shows HTTP requests and responses)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Generate shell completions
    #[arg(long, value_enum)]
    pub generate: Option<Shell>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "parley",
            "--endpoint",
            "http://chat.internal:9000",
            "-m",
            "hello",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.endpoint.as_deref(), Some("http://chat.internal:9000"));
        assert_eq!(cli.message.as_deref(), Some("hello"));
        assert!(cli.verbose);
        assert!(cli.generate.is_none());
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from(["parley", "--generate", "bash"]).unwrap();
        assert_eq!(cli.generate, Some(Shell::Bash));
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
