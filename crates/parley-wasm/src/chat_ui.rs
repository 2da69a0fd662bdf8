use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlTextAreaElement};

use parley_chat::{ChatClient, ChatSession, ClientConfig, ExchangeError};
use parley_types::WELCOME_MESSAGE;

use crate::dom;
use crate::transport::FetchTransport;
use crate::utils::{self, Sender};

const MESSAGES_ID: &str = "chat-messages";
const INPUT_ID: &str = "user-input";
const SEND_BUTTON_ID: &str = "send-button";
const TYPING_INDICATOR_ID: &str = "typing-indicator";

/// Chat page controller. Cheap to clone; clones share the session.
#[derive(Clone)]
pub struct ChatApp {
    document: Document,
    client: Rc<ChatClient<FetchTransport>>,
    session: Rc<RefCell<ChatSession>>,
}

impl ChatApp {
    pub fn new(config: ClientConfig) -> Result<Self, JsValue> {
        let document = crate::document()?;

        Ok(Self {
            document,
            client: Rc::new(ChatClient::new(config, FetchTransport)),
            session: Rc::new(RefCell::new(ChatSession::default())),
        })
    }

    pub fn start(self) -> Result<(), JsValue> {
        let session_id = self.session.borrow_mut().initialize().clone();
        log::info!("Chat session {}", session_id);

        self.setup_message_input()?;
        self.setup_message_sender()?;

        self.add_message(WELCOME_MESSAGE, Sender::Bot)
    }

    fn setup_message_input(&self) -> Result<(), JsValue> {
        let input = dom::get_textarea_by_id(&self.document, INPUT_ID)?;

        // Auto-resize textarea
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(target) = event.target() {
                if let Ok(textarea) = target.dyn_into::<HtmlTextAreaElement>() {
                    if let Ok(html_element) = textarea.clone().dyn_into::<HtmlElement>() {
                        let style = html_element.style();
                        let _ = style.set_property("height", "auto");
                        let height = utils::input_height(textarea.scroll_height());
                        let _ = style.set_property("height", &height);
                    }
                }
            }
        }) as Box<dyn FnMut(_)>);

        input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
        closure.forget();

        Ok(())
    }

    fn setup_message_sender(&self) -> Result<(), JsValue> {
        // Send button
        let send_btn = dom::get_button_by_id(&self.document, SEND_BUTTON_ID)?;
        let app = self.clone();

        let closure = Closure::wrap(Box::new(move || {
            app.spawn_send();
        }) as Box<dyn FnMut()>);

        send_btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();

        // Enter key handler
        let input = dom::get_textarea_by_id(&self.document, INPUT_ID)?;
        let app = self.clone();

        let closure = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
            if utils::is_submit_key(&event.key(), event.shift_key()) {
                event.prevent_default();
                app.spawn_send();
            }
        }) as Box<dyn FnMut(_)>);

        input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();

        Ok(())
    }

    fn spawn_send(&self) {
        let app = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = app.send_message().await {
                log::error!("Failed to send message: {:?}", e);
            }
        });
    }

    async fn send_message(self) -> Result<(), JsValue> {
        let input = dom::get_textarea_by_id(&self.document, INPUT_ID)?;
        let text = input.value();

        // The session borrow must end before the request is awaited
        let begun = self.session.borrow_mut().begin(&text);
        let pending = match begun {
            Ok(Some(pending)) => pending,
            Ok(None) => return Ok(()),
            Err(ExchangeError::Busy) => {
                log::debug!("Reply pending, submission ignored");
                return Ok(());
            }
            Err(e) => {
                log::error!("Could not start exchange: {}", e);
                return Ok(());
            }
        };

        // The slot is claimed now; rendering failures must not skip `finish`
        input.set_value("");
        if let Err(e) = self
            .add_message(pending.question(), Sender::User)
            .and_then(|_| self.set_waiting(true))
        {
            log::error!("Failed to render pending message: {:?}", e);
        }

        let outcome = self.client.dispatch(&pending).await;
        let result = self.session.borrow_mut().finish(pending, outcome);

        if let Err(e) = self.set_waiting(false) {
            log::error!("Failed to clear typing indicator: {:?}", e);
        }

        match result {
            Ok(reply) => self.add_message(&reply, Sender::Bot),
            Err(e) => {
                log::error!("Chat error: {}", e);
                self.add_message(e.user_message(), Sender::Bot)
            }
        }
    }

    /// Append a message bubble and scroll to it
    fn add_message(&self, text: &str, sender: Sender) -> Result<(), JsValue> {
        let container = dom::get_element_by_id(&self.document, MESSAGES_ID)?;
        let message_div =
            dom::create_element_with_class(&self.document, "div", &utils::message_class(sender))?;
        dom::set_text_content(&message_div, text);
        container.append_child(&message_div)?;
        dom::scroll_to_bottom(&container);
        Ok(())
    }

    /// Toggle the typing indicator and the send button together
    fn set_waiting(&self, waiting: bool) -> Result<(), JsValue> {
        let send_btn = dom::get_button_by_id(&self.document, SEND_BUTTON_ID)?;
        send_btn.set_disabled(waiting);

        if waiting {
            self.show_typing_indicator()
        } else {
            dom::remove_element_by_id(&self.document, TYPING_INDICATOR_ID);
            Ok(())
        }
    }

    fn show_typing_indicator(&self) -> Result<(), JsValue> {
        let container = dom::get_element_by_id(&self.document, MESSAGES_ID)?;
        let indicator = dom::create_element_with_class(&self.document, "div", "typing-indicator")?;
        indicator.set_id(TYPING_INDICATOR_ID);
        indicator.set_inner_html("<span></span><span></span><span></span>");
        container.append_child(&indicator)?;
        dom::scroll_to_bottom(&container);
        Ok(())
    }
}
