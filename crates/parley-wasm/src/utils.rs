/// Tallest the input box grows before it scrolls, in pixels
pub const MAX_INPUT_HEIGHT_PX: i32 = 100;

/// Who a rendered message belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

/// CSS classes for a message bubble
pub fn message_class(sender: Sender) -> String {
    format!("message {}-message", sender.as_str())
}

/// Height for the auto-resizing textarea given its content height
pub fn input_height(scroll_height: i32) -> String {
    format!("{}px", scroll_height.clamp(0, MAX_INPUT_HEIGHT_PX))
}

/// Enter submits, Shift+Enter inserts a newline
pub fn is_submit_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}
