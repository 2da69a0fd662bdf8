use async_trait::async_trait;

use crate::error::ExchangeError;

#[cfg(not(target_arch = "wasm32"))]
pub mod http;

/// Status and body of an HTTP response, before interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one JSON POST and returns whatever came back.
///
/// Only failures to complete the round trip are errors here; status codes
/// are classified by the caller. Futures are `?Send`.
#[async_trait(?Send)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, ExchangeError>;
}
