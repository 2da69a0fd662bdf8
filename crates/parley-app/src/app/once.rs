use anyhow::{bail, Result};

use parley_chat::{ChatClient, ChatSession};

use crate::app::repl::send_and_render;
use crate::app::AppConfig;

/// Send a single message, print the reply and return
pub async fn run_message_mode(config: AppConfig, message: &str) -> Result<()> {
    if message.trim().is_empty() {
        log::warn!("Ignoring empty message");
        return Ok(());
    }

    let client = ChatClient::from_config(config.client_config);
    let mut session = ChatSession::new();

    if !send_and_render(&client, &mut session, message).await {
        bail!("exchange failed");
    }
    Ok(())
}
