// src/models.rs

use crate::constants::{ASSISTANT_CLASS, USER_CLASS};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who a transcript entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Style class carried next to `message`.
    pub fn class(&self) -> &'static str {
        match self {
            Role::User => USER_CLASS,
            Role::Assistant => ASSISTANT_CLASS,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class())
    }
}

/// Body posted to the chat endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    pub question: String,
}

/// Body expected back from the chat endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Logs details of each API call.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiCallLog {
    pub timestamp: DateTime<Utc>,
    pub endpoint: String,
    pub request_summary: String,
    pub response_status: u16,
    pub response_time_ms: u128,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_question_field() {
        let body = serde_json::to_value(ChatRequest {
            question: "hello".to_string(),
        })
        .unwrap();
        assert_eq!(body, json!({ "question": "hello" }));
    }

    #[test]
    fn test_response_requires_string_field() {
        let ok: Result<ChatResponse, _> = serde_json::from_value(json!({ "response": "Hi there" }));
        assert_eq!(ok.unwrap().response, "Hi there");

        let missing: Result<ChatResponse, _> = serde_json::from_value(json!({ "answer": "Hi" }));
        assert!(missing.is_err());

        let wrong_type: Result<ChatResponse, _> = serde_json::from_value(json!({ "response": 42 }));
        assert!(wrong_type.is_err());
    }

    #[test]
    fn test_role_classes() {
        assert_eq!(Role::User.class(), "user");
        assert_eq!(Role::Assistant.to_string(), "assistant");
    }
}
