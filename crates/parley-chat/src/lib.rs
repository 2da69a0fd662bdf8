//! # parley-chat
//!
//! Conversation state and the request/response exchange with a remote
//! `/chat/invoke` endpoint.
//!
//! ## Overview
//!
//! - **`ChatSession`**: owns the session identifier, the append-only history
//!   and a single-slot in-flight guard
//! - **`ChatClient`**: turns a user message into one HTTP round trip and
//!   commits successful exchanges to the session
//! - **`Transport`**: the seam between the client and the HTTP stack
//!   (reqwest natively, browser fetch in `parley-wasm`)
//!
//! ## Example
//!
//! ```rust,no_run
//! use parley_chat::{ChatClient, ChatSession, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ChatClient::from_config(ClientConfig::default());
//!     let mut session = ChatSession::new();
//!
//!     match client.exchange(&mut session, "hello").await {
//!         Ok(Some(reply)) => println!("{}", reply),
//!         Ok(None) => {}
//!         Err(e) => eprintln!("{}", e.user_message()),
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod exchange;
pub mod history;
pub mod session;
pub mod transport;

pub use client::ChatClient;
pub use config::{normalize_endpoint, ClientConfig};
pub use error::{ConfigError, ErrorKind, ExchangeError};
pub use exchange::{interpret_reply, PendingExchange};
pub use history::History;
pub use session::{ChatSession, SessionId};
pub use transport::{HttpReply, Transport};

#[cfg(not(target_arch = "wasm32"))]
pub use transport::http::ReqwestTransport;

pub use parley_types::{HistoryEntry, InvokeRequest, InvokeResponse, Role, Turn};
