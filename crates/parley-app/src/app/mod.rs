pub mod once;
pub mod render;
pub mod repl;
pub mod setup;

pub use once::run_message_mode;
pub use repl::run_repl_mode;
pub use setup::{setup_from_cli, AppConfig};
