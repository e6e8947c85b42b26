//! Upstream generation client.
//!
//! The Gemini API is reached through its OpenAI-compatible chat endpoint,
//! so the client is a thin wrapper over `async_openai`. The trait exists
//! so tests can substitute a mock for the real upstream.

use std::sync::Arc;
use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};

use crate::error::AppError;

/// Fixed generation model.
pub const GENERATION_MODEL: &str = "gemini-1.5-pro-latest";

/// Upstream call timeout (seconds).
const GENERATION_TIMEOUT_SECS: u64 = 25;

/// Generation client interface.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait AiClientTrait: Send + Sync {
    /// Sends a composed prompt and returns the raw generated text.
    async fn generate(&self, prompt: &str) -> Result<String, AppError>;
}

/// Arc-wrapped client handle shared through `AppState`.
pub type AiClient = Arc<dyn AiClientTrait>;

/// Gemini client speaking the OpenAI-compatible chat API.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client<OpenAIConfig>,
}

impl GeminiClient {
    pub fn new(api_key: &str, api_base: &str) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(api_base);

        Self {
            client: Client::with_config(config),
        }
    }
}

#[async_trait::async_trait]
impl AiClientTrait for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build request: {e}")))?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(GENERATION_MODEL)
            .messages([ChatCompletionRequestMessage::User(message)])
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build request: {e}")))?;

        // A single call: no retry, no circuit breaking. Every upstream
        // failure collapses into the same error category.
        let response = tokio::time::timeout(
            Duration::from_secs(GENERATION_TIMEOUT_SECS),
            self.client.chat().create(request),
        )
        .await
        .map_err(|_| AppError::Upstream("tempo de resposta esgotado".to_string()))?
        .map_err(|e| AppError::Upstream(e.to_string()))?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| AppError::Upstream("resposta vazia do modelo".to_string()))
    }
}
