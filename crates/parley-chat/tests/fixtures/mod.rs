use serde_json::{json, Value};
use wiremock::matchers::*;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock `/chat/invoke` endpoint for exercising the reqwest transport
pub struct InvokeMockServer {
    server: MockServer,
}

impl InvokeMockServer {
    pub async fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Mock a successful reply for a specific question
    pub async fn mock_reply(&self, question: &str, output: &str) {
        Mock::given(method("POST"))
            .and(path("/chat/invoke"))
            .and(header("content-type", "application/json"))
            .and(body_partial_json(json!({
                "input": { "question": question }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "output": output,
                "metadata": {
                    "run_id": "5f8e0c8e-run",
                    "feedback_tokens": []
                }
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock an error status with a JSON body
    pub async fn mock_error(&self, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path("/chat/invoke"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mock a 200 whose body lacks the `output` field
    pub async fn mock_malformed(&self) {
        Mock::given(method("POST"))
            .and(path("/chat/invoke"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "answer": "wrong field"
            })))
            .mount(&self.server)
            .await;
    }

    /// JSON bodies of every request received so far
    pub async fn received_bodies(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| serde_json::from_slice(&request.body).expect("request body is JSON"))
            .collect()
    }
}
