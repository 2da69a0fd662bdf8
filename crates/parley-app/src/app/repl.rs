use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use parley_chat::{ChatClient, ChatSession, Transport};
use parley_types::WELCOME_MESSAGE;

use crate::app::render::{self, TypingIndicator};
use crate::app::AppConfig;

/// A line typed at the prompt
#[derive(Debug, PartialEq, Eq)]
pub enum ReplInput<'a> {
    Exit,
    History,
    Session,
    Help,
    Unknown(&'a str),
    Message(&'a str),
}

impl<'a> ReplInput<'a> {
    /// Classify an already trimmed, non-empty line
    pub fn parse(line: &'a str) -> Self {
        match line {
            "exit" | "quit" | "/exit" | "/quit" => ReplInput::Exit,
            "/history" => ReplInput::History,
            "/session" => ReplInput::Session,
            "/help" => ReplInput::Help,
            other if other.starts_with('/') && !other.contains(char::is_whitespace) => {
                ReplInput::Unknown(other)
            }
            other => ReplInput::Message(other),
        }
    }
}

/// Run one exchange and render its outcome. Returns whether a reply arrived.
pub async fn send_and_render<T: Transport>(
    client: &ChatClient<T>,
    session: &mut ChatSession,
    text: &str,
) -> bool {
    let result = {
        let _typing = TypingIndicator::show();
        client.exchange(session, text).await
    };

    match result {
        Ok(Some(reply)) => {
            render::print_reply(&reply);
            true
        }
        Ok(None) => true,
        Err(e) => {
            // Detail was logged by the client; the user only sees the generic text
            log::debug!("Exchange error kind: {:?}", e.kind());
            render::print_error(e.user_message());
            false
        }
    }
}

fn print_help() {
    println!("{} Commands:", "💡".bright_yellow());
    println!("  /history                - Show the conversation so far");
    println!("  /session                - Show the session identifier");
    println!("  /help                   - Show this help");
    println!("  exit, quit              - Leave");
}

/// Run interactive REPL mode
pub async fn run_repl_mode(config: AppConfig) -> Result<()> {
    println!("{}", "💬 Parley".bright_cyan().bold());
    println!(
        "{}",
        format!("Endpoint: {}", config.client_config.invoke_url()).bright_black()
    );
    println!("{}", "Type 'exit' or 'quit' to exit, or '/help' for commands\n".bright_black());

    let client = ChatClient::from_config(config.client_config);
    let mut session = ChatSession::new();

    if let Some(id) = session.id() {
        log::debug!("Started session {}", id);
    }
    render::print_reply(WELCOME_MESSAGE);

    let mut rl = DefaultEditor::new()?;

    loop {
        let readline = rl.readline(&format!("{} ", "You:".bright_green().bold()));

        match readline {
            Ok(line) => {
                let line = line.trim();

                // Blank input never reaches the client
                if line.is_empty() {
                    continue;
                }

                match ReplInput::parse(line) {
                    ReplInput::Exit => {
                        println!("{}", "Goodbye!".bright_cyan());
                        break;
                    }
                    ReplInput::History => render::print_history(&session),
                    ReplInput::Session => {
                        let id = session.initialize();
                        println!("{} Session: {}", "🆔".bright_cyan(), id);
                    }
                    ReplInput::Help => print_help(),
                    ReplInput::Unknown(command) => {
                        eprintln!(
                            "{} Unknown command '{}'. Type /help for commands.",
                            "❌".bright_red(),
                            command
                        );
                    }
                    ReplInput::Message(text) => {
                        rl.add_history_entry(text)?;
                        send_and_render(&client, &mut session, text).await;
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".bright_black());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_cyan());
                break;
            }
            Err(err) => {
                eprintln!("{} {}", "Error:".bright_red().bold(), err);
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(ReplInput::parse("exit"), ReplInput::Exit);
        assert_eq!(ReplInput::parse("quit"), ReplInput::Exit);
        assert_eq!(ReplInput::parse("/history"), ReplInput::History);
        assert_eq!(ReplInput::parse("/session"), ReplInput::Session);
        assert_eq!(ReplInput::parse("/help"), ReplInput::Help);
        assert_eq!(ReplInput::parse("/nope"), ReplInput::Unknown("/nope"));
    }

    #[test]
    fn test_parse_messages() {
        assert_eq!(ReplInput::parse("hello"), ReplInput::Message("hello"));
        assert_eq!(
            ReplInput::parse("/etc/hosts is missing a line"),
            ReplInput::Message("/etc/hosts is missing a line")
        );
        assert_eq!(ReplInput::parse("exit now"), ReplInput::Message("exit now"));
    }
}
