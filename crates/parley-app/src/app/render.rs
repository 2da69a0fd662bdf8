use colored::Colorize;
use std::io::{self, Write};

use parley_chat::ChatSession;
use parley_types::Role;

/// Print an assistant message
pub fn print_reply(text: &str) {
    println!("\n{} {}\n", "Assistant:".bright_blue().bold(), text);
}

/// Print the user-facing text for a failed exchange
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "Assistant:".bright_blue().bold(), message.bright_red());
}

/// Print every turn of the session so far
pub fn print_history(session: &ChatSession) {
    let turns = session.history().turns();
    if turns.is_empty() {
        println!("{}", "No messages yet.".bright_black());
        return;
    }

    for turn in turns {
        let label = match turn.role() {
            Role::Human => "You:".bright_green().bold(),
            Role::Assistant => "Assistant:".bright_blue().bold(),
        };
        println!("{} {}", label, turn.content());
    }
    println!();
}

/// "typing" line shown while an exchange is in flight, erased on drop
pub struct TypingIndicator {
    enabled: bool,
}

impl TypingIndicator {
    pub fn show() -> Self {
        print!("{}", "Assistant is typing...".bright_black());
        let enabled = io::stdout().flush().is_ok();
        Self { enabled }
    }
}

impl Drop for TypingIndicator {
    fn drop(&mut self) {
        if self.enabled {
            // Carriage return and clear the line
            print!("\r\x1b[2K");
            let _ = io::stdout().flush();
        }
    }
}
