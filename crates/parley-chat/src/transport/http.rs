use async_trait::async_trait;
use parley_logging::{log_request, log_response};
use reqwest::header::CONTENT_TYPE;

use crate::error::ExchangeError;
use crate::transport::{HttpReply, Transport};

/// Native transport backed by reqwest
pub struct ReqwestTransport {
    client: reqwest::Client,
    verbose: bool,
}

impl ReqwestTransport {
    pub fn new(verbose: bool) -> Self {
        Self::with_client(reqwest::Client::new(), verbose)
    }

    pub fn with_client(client: reqwest::Client, verbose: bool) -> Self {
        Self { client, verbose }
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, ExchangeError> {
        log_request(url, &body, self.verbose);

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| ExchangeError::Transport(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ExchangeError::Transport(format!("failed to read response body: {}", e)))?;

        log_response(status, &body, self.verbose);

        Ok(HttpReply {
            status: status.as_u16(),
            body,
        })
    }
}
