use thiserror::Error;

pub type ChatResult<T> = Result<T, ChatError>;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Response decoding error (status {status}): {message}")]
    Decode { status: u16, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl ChatError {
    pub fn api_error(msg: impl Into<String>) -> Self {
        ChatError::Api(msg.into())
    }

    pub fn decode_error(status: u16, msg: impl Into<String>) -> Self {
        ChatError::Decode {
            status,
            message: msg.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        ChatError::Config(msg.into())
    }

    pub fn logging_error(msg: impl Into<String>) -> Self {
        ChatError::Logging(msg.into())
    }

    /// HTTP status of the reply, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ChatError::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<flexi_logger::FlexiLoggerError> for ChatError {
    fn from(err: flexi_logger::FlexiLoggerError) -> Self {
        ChatError::logging_error(err.to_string())
    }
}
