use async_trait::async_trait;
use gloo_net::http::Request;

use parley_chat::{ExchangeError, HttpReply, Transport};

/// Browser transport using the Fetch API
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, ExchangeError> {
        let request = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| ExchangeError::Transport(format!("failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| ExchangeError::Transport(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ExchangeError::Transport(format!("failed to read response body: {}", e)))?;

        Ok(HttpReply { status, body })
    }
}
