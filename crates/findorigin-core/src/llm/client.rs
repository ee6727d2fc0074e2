//! HTTP client for OpenAI-compatible chat completion services

use crate::config::CompletionConfig;
use crate::error::{FindOriginError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Chat message for completion requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Body of one chat completion request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

/// Raw reply of the completion service: status code and undecoded body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionReply {
    pub status: u16,
    pub body: String,
}

impl CompletionReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status == 429
    }
}

/// Trait for chat completion transports
///
/// Implementations send the request and hand back the status and body
/// without interpreting them; only transport failures are errors.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionReply>;
}

/// OpenAI-compatible completion client with bearer authentication
pub struct HttpCompletionClient {
    http_client: reqwest::Client,
    url: String,
    api_key: String,
}

impl HttpCompletionClient {
    /// Create client for `config.url` authenticated with `api_key`
    pub fn new(config: &CompletionConfig, api_key: impl Into<String>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build().map_err(FindOriginError::Http)?;

        Ok(Self {
            http_client,
            url: config.url.clone(),
            api_key: api_key.into(),
        })
    }

    /// Endpoint this client posts to
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CompletionBackend for HttpCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionReply> {
        let start = Instant::now();

        let response = self
            .http_client
            .post(&self.url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(request)
            .send()
            .await
            .map_err(FindOriginError::Http)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(FindOriginError::Http)?;

        tracing::debug!(
            "Completion {} answered HTTP {} in {} ms ({} bytes)",
            request.model,
            status,
            start.elapsed().as_millis(),
            body.len()
        );

        Ok(CompletionReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = CompletionRequest {
            model: "openrouter/free".to_string(),
            messages: vec![ChatMessage::system("sys"), ChatMessage::user("text")],
            temperature: 0.3,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "openrouter/free");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "text");
        assert!((json["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_reply_status_classes() {
        assert!(CompletionReply::new(200, "").is_success());
        assert!(CompletionReply::new(204, "").is_success());
        assert!(!CompletionReply::new(429, "").is_success());
        assert!(CompletionReply::new(429, "").is_rate_limited());
        assert!(!CompletionReply::new(500, "").is_rate_limited());
    }

    #[test]
    fn test_client_keeps_configured_url() {
        let config = CompletionConfig {
            url: "http://localhost:9/v1/chat/completions".to_string(),
            timeout_secs: Some(5),
            ..CompletionConfig::default()
        };
        let client = HttpCompletionClient::new(&config, "key").unwrap();
        assert_eq!(client.url(), "http://localhost:9/v1/chat/completions");
    }
}
