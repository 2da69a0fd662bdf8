use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use parley_chat::ClientConfig;
use parley_types::DEFAULT_ENDPOINT;

mod chat_ui;
mod dom;
mod transport;
mod utils;

pub use transport::FetchTransport;

/// Initialize the WASM application
/// This sets up panic hooks and logging
#[wasm_bindgen(start)]
pub fn init() {
    // Set panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    wasm_logger::init(wasm_logger::Config::default());

    log::info!("Parley WASM initialized");
}

/// Attach the chat UI to the page.
///
/// `endpoint` is the base URL of the chat server; defaults to the loopback address.
#[wasm_bindgen]
pub fn init_chat(endpoint: Option<String>) -> Result<(), JsValue> {
    let endpoint = endpoint
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    let config = ClientConfig::new(&endpoint).map_err(|e| JsValue::from_str(&e.to_string()))?;

    log::info!("Initializing chat against {}", config.invoke_url());
    chat_ui::ChatApp::new(config)?.start()
}

/// Get the document object
fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("No document object"))
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window object"))
}
