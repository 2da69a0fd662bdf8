//! Core types for parley
//!
//! Conversation turns and the JSON shapes exchanged with a `/chat/invoke`
//! endpoint. Shared by the terminal and browser front ends.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Constants
// ============================================================================

/// Endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

/// Path appended to the endpoint for every exchange
pub const INVOKE_PATH: &str = "/chat/invoke";

/// Shown to the user whenever an exchange fails, whatever the cause
pub const GENERIC_ERROR_MESSAGE: &str = "Sorry, I encountered an error. Please try again.";

/// Shown when a message is submitted while a reply is still pending
pub const BUSY_MESSAGE: &str = "Please wait for the current reply.";

/// First message rendered when a session starts
pub const WELCOME_MESSAGE: &str = "Welcome! How can I help you today?";

// ============================================================================
// Conversation Types
// ============================================================================

/// Who authored a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Human,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Human => "human",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One message in a conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    role: Role,
    content: String,
}

impl Turn {
    pub fn human(content: impl Into<String>) -> Self {
        Self {
            role: Role::Human,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

// ============================================================================
// Wire Types
// ============================================================================

/// A single `chat_history` element: `{"human": ...}` or `{"ai": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryEntry {
    Human(String),
    Ai(String),
}

impl From<&Turn> for HistoryEntry {
    fn from(turn: &Turn) -> Self {
        match turn.role() {
            Role::Human => HistoryEntry::Human(turn.content().to_string()),
            Role::Assistant => HistoryEntry::Ai(turn.content().to_string()),
        }
    }
}

/// Body of `POST {endpoint}/chat/invoke`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvokeRequest {
    pub input: ChatInput,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatInput {
    pub question: String,
    pub chat_history: Vec<HistoryEntry>,
    pub session_id: String,
}

/// Successful response body. Only `output` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvokeResponse {
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ResponseMetadata>,
}

/// Run metadata some servers attach to a response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMetadata {
    #[serde(default)]
    pub run_id: Option<String>,
}
