//! Source query orchestration over a model fallback chain

use super::decode::{decode_find_result, excerpt, parse_reply_content};
use super::FindResult;
use crate::config::{CompletionConfig, DEFAULT_MODELS};
use crate::error::{FindOriginError, Result};
use crate::llm::{
    ChatMessage, CompletionBackend, CompletionReply, CompletionRequest, HttpCompletionClient,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Characters of an error body quoted in failure messages
const BODY_EXCERPT_CHARS: usize = 500;

/// Instruction sent as the system turn of every request
pub const SYSTEM_PROMPT: &str = r#"Ты — помощник FindOrigin, который ищет первоисточники информации.
Пользователь присылает текст. Найди 1–3 вероятных источника, где эта информация могла появиться впервые.

Подходящие источники:
- официальные сайты госорганов, компаний и организаций
- новостные издания
- блоги и медиа
- исследования и отчёты

Ответ — СТРОГО JSON такого вида:
{
  "sources": [
    {
      "url": "https://...",
      "title": "Название источника",
      "confidence": "высокая" | "средняя" | "низкая",
      "description": "Чем источник относится к тексту"
    }
  ],
  "summary": "Вывод в 1–2 предложениях"
}

Сопоставляй смысл, а не дословный текст. confidence: высокая — источник почти наверняка содержит эту информацию; средняя — вероятно содержит; низкая — возможно.
Если подходящих источников нет, верни пустой массив sources и объясни причину в summary.
Только валидный JSON, без markdown и комментариев."#;

/// Ordered model identifiers and the request policy applied to them
#[derive(Debug, Clone, PartialEq)]
pub struct ModelChain {
    pub models: Vec<String>,
    pub temperature: f32,
    /// Wait before the single retry of the first model after a rate limit
    pub rate_limit_backoff: Duration,
}

impl Default for ModelChain {
    fn default() -> Self {
        Self::new(DEFAULT_MODELS.iter().map(|m| m.to_string()).collect())
    }
}

impl ModelChain {
    pub fn new(models: Vec<String>) -> Self {
        Self {
            models,
            temperature: 0.3,
            rate_limit_backoff: Duration::from_secs(3),
        }
    }

    pub fn from_config(config: &CompletionConfig) -> Self {
        Self {
            models: config.models.clone(),
            temperature: config.temperature,
            rate_limit_backoff: Duration::from_millis(config.rate_limit_backoff_ms),
        }
    }

    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.rate_limit_backoff = backoff;
        self
    }
}

/// What happened to one request of a source query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum AttemptOutcome {
    Success,
    RateLimited,
    DecodeFailed,
    /// Non-2xx status, or no response at all
    Failed { status: Option<u16> },
}

/// One request made while answering a single source query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelAttempt {
    pub model: String,
    #[serde(flatten)]
    pub outcome: AttemptOutcome,
}

impl ModelAttempt {
    fn new(model: &str, outcome: AttemptOutcome) -> Self {
        Self {
            model: model.to_string(),
            outcome,
        }
    }
}

/// Finds candidate sources for a text through a completion backend
pub struct SourceFinder {
    backend: Arc<dyn CompletionBackend>,
    chain: ModelChain,
}

impl SourceFinder {
    /// Create from a backend and model chain
    pub fn new(backend: Arc<dyn CompletionBackend>, chain: ModelChain) -> Self {
        Self { backend, chain }
    }

    /// Create an HTTP-backed finder from configuration
    pub fn from_config(config: &CompletionConfig, credential: &str) -> Result<Self> {
        if config.models.is_empty() {
            return Err(FindOriginError::Config(
                "completion model list is empty".to_string(),
            ));
        }
        if credential.trim().is_empty() {
            return Err(FindOriginError::Config(
                "completion API key is not set".to_string(),
            ));
        }

        let client = HttpCompletionClient::new(config, credential)?;
        Ok(Self::new(Arc::new(client), ModelChain::from_config(config)))
    }

    /// Configured model identifiers in priority order
    pub fn models(&self) -> &[String] {
        &self.chain.models
    }

    /// Ask the model chain for sources of `text`
    pub async fn find_sources(&self, text: &str) -> Result<FindResult> {
        self.find_sources_traced(text).await.0
    }

    /// Like [`find_sources`](Self::find_sources), also returning every
    /// request made for this call.
    ///
    /// Models are tried strictly in order. A rate-limited first model is
    /// retried once after the back-off; later rate limits and undecodable
    /// answers move on to the next model; any other failure ends the call.
    pub async fn find_sources_traced(
        &self,
        text: &str,
    ) -> (Result<FindResult>, Vec<ModelAttempt>) {
        let mut attempts = Vec::new();
        let result = self.run_chain(text, &mut attempts).await;

        tracing::debug!(
            "Source query finished after {} request(s): {:?}",
            attempts.len(),
            attempts
        );

        (result, attempts)
    }

    async fn run_chain(&self, text: &str, attempts: &mut Vec<ModelAttempt>) -> Result<FindResult> {
        let mut last_error: Option<FindOriginError> = None;

        for (index, model) in self.chain.models.iter().enumerate() {
            let mut reply = self.request(model, text, attempts).await?;

            if reply.is_rate_limited() && index == 0 {
                attempts.push(ModelAttempt::new(model, AttemptOutcome::RateLimited));
                tracing::warn!(
                    "Model {} is rate limited, retrying in {} ms",
                    model,
                    self.chain.rate_limit_backoff.as_millis()
                );
                tokio::time::sleep(self.chain.rate_limit_backoff).await;
                reply = self.request(model, text, attempts).await?;
            }

            if reply.is_success() {
                match parse_reply_content(&reply.body).and_then(|c| decode_find_result(&c)) {
                    Ok(result) => {
                        attempts.push(ModelAttempt::new(model, AttemptOutcome::Success));
                        tracing::info!(
                            "Model {} suggested {} source(s)",
                            model,
                            result.sources.len()
                        );
                        return Ok(result);
                    }
                    Err(e) => {
                        attempts.push(ModelAttempt::new(model, AttemptOutcome::DecodeFailed));
                        tracing::warn!("Model {} gave an unusable answer: {}", model, e);
                        last_error = Some(e);
                        continue;
                    }
                }
            }

            let error = FindOriginError::SourceQuery(format!(
                "completion API error {} (model {}): {}",
                reply.status,
                model,
                excerpt(&reply.body, BODY_EXCERPT_CHARS)
            ));

            if reply.is_rate_limited() {
                attempts.push(ModelAttempt::new(model, AttemptOutcome::RateLimited));
                tracing::warn!("Model {} is rate limited, trying next model", model);
                last_error = Some(error);
                continue;
            }

            attempts.push(ModelAttempt::new(
                model,
                AttemptOutcome::Failed {
                    status: Some(reply.status),
                },
            ));
            tracing::warn!("Model {} failed with HTTP {}", model, reply.status);
            return Err(error);
        }

        Err(last_error.unwrap_or_else(|| {
            FindOriginError::SourceQuery("no answer obtained from any model".to_string())
        }))
    }

    /// Send one request; transport failures end the call
    async fn request(
        &self,
        model: &str,
        text: &str,
        attempts: &mut Vec<ModelAttempt>,
    ) -> Result<CompletionReply> {
        let request = CompletionRequest {
            model: model.to_string(),
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(text)],
            temperature: self.chain.temperature,
        };

        tracing::debug!("Requesting sources from {}", model);

        self.backend.complete(&request).await.inspect_err(|e| {
            attempts.push(ModelAttempt::new(model, AttemptOutcome::Failed { status: None }));
            tracing::warn!("Request to {} failed: {}", model, e);
        })
    }
}

/// Find sources for `text` with the default completion configuration and
/// the given API key.
pub async fn find_sources(text: &str, credential: &str) -> Result<FindResult> {
    let config = CompletionConfig::default();
    SourceFinder::from_config(&config, credential)?
        .find_sources(text)
        .await
}
