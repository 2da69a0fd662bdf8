use parley_types::InvokeResponse;

use crate::config::ClientConfig;
use crate::error::ExchangeError;
use crate::exchange::{interpret_reply, PendingExchange};
use crate::session::ChatSession;
use crate::transport::Transport;

/// Sends exchanges for a session to the configured endpoint.
///
/// One request per exchange; no retries, no timeout, no cancellation.
pub struct ChatClient<T> {
    config: ClientConfig,
    transport: T,
}

impl<T: Transport> ChatClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Perform the round trip for a pending exchange without touching the session
    pub async fn dispatch(&self, pending: &PendingExchange) -> Result<InvokeResponse, ExchangeError> {
        let url = self.config.invoke_url();
        let body = serde_json::to_string(pending.request())
            .map_err(|e| ExchangeError::Protocol(format!("failed to encode request: {}", e)))?;

        log::debug!(
            "Sending exchange for {} with {} prior turns to {}",
            pending.request().input.session_id,
            pending.request().input.chat_history.len(),
            url
        );

        let result = match self.transport.post_json(&url, body).await {
            Ok(reply) => interpret_reply(reply),
            Err(e) => Err(e),
        };

        match &result {
            Ok(response) => {
                if let Some(run_id) = response.metadata.as_ref().and_then(|m| m.run_id.as_deref()) {
                    log::debug!("Exchange completed (run {})", run_id);
                } else {
                    log::debug!("Exchange completed");
                }
            }
            Err(e) => log::error!("Exchange failed: {}", e),
        }

        result
    }

    /// Send `text` and commit the exchange to `session` on success.
    ///
    /// Returns `Ok(None)` for blank input without making a request. On error
    /// the session history is unchanged.
    pub async fn exchange(
        &self,
        session: &mut ChatSession,
        text: &str,
    ) -> Result<Option<String>, ExchangeError> {
        let Some(pending) = session.begin(text)? else {
            return Ok(None);
        };

        let outcome = self.dispatch(&pending).await;
        session.finish(pending, outcome).map(Some)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ChatClient<crate::transport::http::ReqwestTransport> {
    /// Client using reqwest, honouring the config's verbose flag
    pub fn from_config(config: ClientConfig) -> Self {
        let transport = crate::transport::http::ReqwestTransport::new(config.verbose());
        Self::new(config, transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::HttpReply;
    use async_trait::async_trait;
    use parley_types::{HistoryEntry, Role};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays canned replies and records every request it is handed
    #[derive(Default)]
    struct ScriptedTransport {
        replies: RefCell<VecDeque<Result<HttpReply, ExchangeError>>>,
        requests: RefCell<Vec<(String, serde_json::Value)>>,
    }

    impl ScriptedTransport {
        fn reply(self, status: u16, body: &str) -> Self {
            self.replies.borrow_mut().push_back(Ok(HttpReply {
                status,
                body: body.to_string(),
            }));
            self
        }

        fn fail(self, message: &str) -> Self {
            self.replies
                .borrow_mut()
                .push_back(Err(ExchangeError::Transport(message.to_string())));
            self
        }

        fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl Transport for ScriptedTransport {
        async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, ExchangeError> {
            let value = serde_json::from_str(&body).expect("request body is JSON");
            self.requests.borrow_mut().push((url.to_string(), value));
            self.replies
                .borrow_mut()
                .pop_front()
                .expect("no scripted reply left")
        }
    }

    fn client(transport: ScriptedTransport) -> ChatClient<ScriptedTransport> {
        ChatClient::new(ClientConfig::default(), transport)
    }

    #[tokio::test]
    async fn test_happy_path() {
        let client = client(ScriptedTransport::default().reply(200, r#"{"output":"hi there"}"#));
        let mut session = ChatSession::new();

        let reply = client.exchange(&mut session, "hello").await.unwrap();

        assert_eq!(reply.as_deref(), Some("hi there"));
        let turns = session.history().turns();
        assert_eq!(turns.len(), 2);
        assert_eq!((turns[0].role(), turns[0].content()), (Role::Human, "hello"));
        assert_eq!((turns[1].role(), turns[1].content()), (Role::Assistant, "hi there"));
    }

    #[tokio::test]
    async fn test_empty_input_makes_no_request() {
        let client = client(ScriptedTransport::default());
        let mut session = ChatSession::new();

        assert_eq!(client.exchange(&mut session, "").await.unwrap(), None);
        assert_eq!(client.exchange(&mut session, "   ").await.unwrap(), None);

        assert_eq!(client.transport.request_count(), 0);
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn test_server_error_leaves_history_empty() {
        let client = client(ScriptedTransport::default().reply(500, r#"{"detail":"boom"}"#));
        let mut session = ChatSession::new();

        let error = client.exchange(&mut session, "hello").await.unwrap_err();

        assert!(matches!(error, ExchangeError::Application { status: 500, .. }));
        assert!(!error.user_message().contains("boom"));
        assert!(session.history().is_empty());
        assert!(!session.is_in_flight());
    }

    #[tokio::test]
    async fn test_failures_never_mutate_history() {
        let client = client(
            ScriptedTransport::default()
                .reply(200, r#"{"output":"first"}"#)
                .fail("connection reset")
                .reply(404, "not found")
                .reply(200, r#"{"reply":"wrong field"}"#),
        );
        let mut session = ChatSession::new();
        client.exchange(&mut session, "one").await.unwrap();

        for text in ["two", "three", "four"] {
            let before = session.history().clone();
            assert!(client.exchange(&mut session, text).await.is_err());
            assert_eq!(session.history(), &before);
        }
    }

    #[tokio::test]
    async fn test_sequential_exchanges_build_history_and_reuse_session_id() {
        let client = client(
            ScriptedTransport::default()
                .reply(200, r#"{"output":"hello"}"#)
                .reply(200, r#"{"output":"goodbye"}"#),
        );
        let mut session = ChatSession::new();
        let session_id = session.id().unwrap().to_string();

        client.exchange(&mut session, "hi").await.unwrap();
        client.exchange(&mut session, "bye").await.unwrap();

        assert_eq!(
            session.serialize().collect::<Vec<_>>(),
            vec![
                HistoryEntry::Human("hi".to_string()),
                HistoryEntry::Ai("hello".to_string()),
                HistoryEntry::Human("bye".to_string()),
                HistoryEntry::Ai("goodbye".to_string()),
            ]
        );

        let requests = client.transport.requests.borrow();
        assert_eq!(requests[0].0, "http://localhost:8000/chat/invoke");
        assert_eq!(requests[0].1["input"]["chat_history"], serde_json::json!([]));
        assert_eq!(
            requests[1].1["input"]["chat_history"],
            serde_json::json!([{"human": "hi"}, {"ai": "hello"}])
        );
        assert_eq!(requests[0].1["input"]["session_id"], session_id.as_str());
        assert_eq!(requests[1].1["input"]["session_id"], session_id.as_str());
    }

    #[tokio::test]
    async fn test_retry_after_failure_uses_same_history() {
        let client = client(
            ScriptedTransport::default()
                .fail("connection refused")
                .reply(200, r#"{"output":"there you are"}"#),
        );
        let mut session = ChatSession::new();

        assert!(client.exchange(&mut session, "hello?").await.is_err());
        let reply = client.exchange(&mut session, "hello?").await.unwrap();

        assert_eq!(reply.as_deref(), Some("there you are"));
        let requests = client.transport.requests.borrow();
        assert_eq!(requests[0].1, requests[1].1);
    }

    #[tokio::test]
    async fn test_dispatch_does_not_touch_session() {
        let client = client(ScriptedTransport::default().reply(200, r#"{"output":"ok"}"#));
        let mut session = ChatSession::new();
        let pending = session.begin("ping").unwrap().unwrap();

        let response = client.dispatch(&pending).await.unwrap();

        assert_eq!(response.output, "ok");
        assert!(session.history().is_empty());
        assert!(session.is_in_flight());
        session.finish(pending, Ok(response)).unwrap();
        assert_eq!(session.history().len(), 2);
    }
}
