use parley_types::{InvokeRequest, InvokeResponse};

use crate::error::ExchangeError;
use crate::transport::HttpReply;

/// An exchange that has claimed its session's in-flight slot but has not
/// been finished yet. Not `Clone`: the ticket is the claim on the slot.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingExchange {
    ticket: u64,
    question: String,
    request: InvokeRequest,
}

impl PendingExchange {
    pub(crate) fn new(ticket: u64, question: String, request: InvokeRequest) -> Self {
        Self {
            ticket,
            question,
            request,
        }
    }

    pub(crate) fn ticket(&self) -> u64 {
        self.ticket
    }

    /// The trimmed user message
    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn request(&self) -> &InvokeRequest {
        &self.request
    }

    pub(crate) fn into_question(self) -> String {
        self.question
    }
}

/// Classify a raw HTTP reply into a typed response or an error
pub fn interpret_reply(reply: HttpReply) -> Result<InvokeResponse, ExchangeError> {
    if !reply.is_success() {
        // Error bodies are read for diagnostics only; keep raw text if not JSON
        let detail = serde_json::from_str::<serde_json::Value>(&reply.body)
            .unwrap_or(serde_json::Value::String(reply.body));
        return Err(ExchangeError::Application {
            status: reply.status,
            detail,
        });
    }

    serde_json::from_str::<InvokeResponse>(&reply.body)
        .map_err(|e| ExchangeError::Protocol(format!("unexpected response body: {}", e)))
}
