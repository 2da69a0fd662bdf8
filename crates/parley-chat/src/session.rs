use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use parley_types::{ChatInput, HistoryEntry, InvokeRequest, InvokeResponse};
use uuid::Uuid;

use crate::error::ExchangeError;
use crate::exchange::PendingExchange;
use crate::history::History;

/// Opaque correlation token sent with every exchange of a session
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn generate() -> Self {
        Self(format!("session_{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of slot tickets, unique across every session in the process
static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

/// Conversation state owned by one front end for the lifetime of a session.
///
/// History only ever contains successful exchanges. At most one exchange is
/// pending at a time: `begin` claims the slot and `finish` releases it.
#[derive(Debug, Default)]
pub struct ChatSession {
    id: Option<SessionId>,
    history: History,
    in_flight: Option<u64>,
}

impl ChatSession {
    /// New session with a freshly generated identifier
    pub fn new() -> Self {
        let mut session = Self::default();
        session.initialize();
        session
    }

    pub fn with_id(id: impl Into<SessionId>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Generate the session identifier if there is none yet
    pub fn initialize(&mut self) -> &SessionId {
        self.id.get_or_insert_with(SessionId::generate)
    }

    pub fn id(&self) -> Option<&SessionId> {
        self.id.as_ref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Commit a successful exchange
    pub fn record(&mut self, human: impl Into<String>, assistant: impl Into<String>) {
        self.history.record(human, assistant);
    }

    pub fn serialize(&self) -> impl Iterator<Item = HistoryEntry> + '_ {
        self.history.serialize()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Claim the in-flight slot and build the request for `text`.
    ///
    /// Blank input yields `Ok(None)` and changes nothing. The request carries
    /// the history as it stands now, before this exchange.
    pub fn begin(&mut self, text: &str) -> Result<Option<PendingExchange>, ExchangeError> {
        let question = text.trim();
        if question.is_empty() {
            return Ok(None);
        }
        if self.in_flight.is_some() {
            return Err(ExchangeError::Busy);
        }

        let session_id = self.initialize().to_string();
        let request = InvokeRequest {
            input: ChatInput {
                question: question.to_string(),
                chat_history: self.history.serialize().collect(),
                session_id,
            },
        };

        let ticket = NEXT_TICKET.fetch_add(1, Ordering::Relaxed);
        self.in_flight = Some(ticket);
        Ok(Some(PendingExchange::new(ticket, question.to_string(), request)))
    }

    /// Release the slot and, if the round trip succeeded, record the exchange.
    ///
    /// A pending exchange that does not hold this session's slot is rejected
    /// with `ExchangeError::Stale`; slot and history are left alone.
    pub fn finish(
        &mut self,
        pending: PendingExchange,
        outcome: Result<InvokeResponse, ExchangeError>,
    ) -> Result<String, ExchangeError> {
        if self.in_flight != Some(pending.ticket()) {
            return Err(ExchangeError::Stale);
        }
        self.in_flight = None;

        let response = outcome?;
        self.history.record(pending.into_question(), response.output.clone());
        Ok(response.output)
    }
}
