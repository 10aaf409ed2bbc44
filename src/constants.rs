// Endpoint
pub const DEFAULT_CHAT_ENDPOINT: &str = "http://127.0.0.1:5000/chat";

// Transcript text
pub const PLACEHOLDER_TEXT: &str = "Thinking...";
pub const FALLBACK_TEXT: &str = "Sorry, something went wrong.";

// Element identifiers
pub const SEND_BUTTON_ID: &str = "send-btn";
pub const USER_INPUT_ID: &str = "user-input";
pub const CHAT_BOX_ID: &str = "chat-box";

// Style classes
pub const MESSAGE_CLASS: &str = "message";
pub const USER_CLASS: &str = "user";
pub const ASSISTANT_CLASS: &str = "assistant";

pub const SEND_BUTTON_LABEL: &str = "[ Send ]";
pub const MAX_LOG_ENTRIES: usize = 200;
