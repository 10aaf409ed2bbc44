use crate::{
    config::Config,
    errors::{ChatError, ChatResult},
    logging::log_api_call,
    models::{ApiCallLog, ChatRequest, ChatResponse},
};
use chrono::Utc;
use log::debug;
use reqwest::Client;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub content: String,
}

/// HTTP client for the chat endpoint. Cheap to clone; clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: Client,
    endpoint: String,
}

impl ChatClient {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> ChatResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ChatError::api_error(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &Config) -> ChatResult<Self> {
        Self::new(
            config.endpoint.clone(),
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts `{"question": ...}` and reads the `response` field of the reply.
    ///
    /// The status code is logged but never checked: an error status whose
    /// body still decodes is treated like any other reply.
    pub async fn ask(&self, question: &str) -> ChatResult<ApiResponse> {
        let started = Instant::now();
        let payload = ChatRequest {
            question: question.to_string(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ChatError::api_error(format!("Request failed: {}", e)))?;

        let status = response.status();
        debug!("Response Status: {}", status.as_u16());

        let body = response
            .bytes()
            .await
            .map_err(|e| ChatError::api_error(format!("Failed to read response body: {}", e)))?;

        log_api_call(&ApiCallLog {
            timestamp: Utc::now(),
            endpoint: self.endpoint.clone(),
            request_summary: format!("question ({} chars)", question.chars().count()),
            response_status: status.as_u16(),
            response_time_ms: started.elapsed().as_millis(),
        });

        let data: ChatResponse = serde_json::from_slice(&body).map_err(|e| {
            ChatError::decode_error(status.as_u16(), format!("Failed to parse response: {}", e))
        })?;

        Ok(ApiResponse {
            status: status.as_u16(),
            content: data.response,
        })
    }
}
