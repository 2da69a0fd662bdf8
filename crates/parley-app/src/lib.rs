//! parley terminal front end
//!
//! CLI parsing, configuration and the interactive REPL around `parley-chat`.

pub use parley_chat as chat;
pub use parley_types as types;

pub mod app;
pub mod cli;
pub mod config;

pub use app::{run_message_mode, run_repl_mode, setup_from_cli, AppConfig};
pub use cli::Cli;
pub use config::FileConfig;
