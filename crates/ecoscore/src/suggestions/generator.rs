use std::future::Future;

use super::anthropic::AnthropicClient;
use crate::config::SuggestionConfig;

/// Prompt-in, text-out contract for the external language model.
pub trait TextGenerator: Send + Sync {
    fn generate(
        &self,
        prompt: &str,
        max_tokens: u32,
    ) -> impl Future<Output = Result<String, GenerationError>> + Send;
}

/// Reasons an external generation attempt produced no text.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("text generation is not configured")]
    NotConfigured,
    #[error("text generation request timed out")]
    Timeout,
    #[error("text generation transport failed: {0}")]
    Transport(String),
    #[error("text generation provider returned status {status}: {detail}")]
    Provider { status: u16, detail: String },
    #[error("text generation response was malformed: {0}")]
    MalformedResponse(String),
}

/// Generator selected from configuration: the live client when a credential is
/// present, otherwise a disabled backend that always falls back.
#[derive(Debug)]
pub enum SuggestionBackend {
    Anthropic(AnthropicClient),
    Disabled,
}

impl SuggestionBackend {
    pub fn from_config(config: &SuggestionConfig) -> Result<Self, GenerationError> {
        match &config.api_key {
            Some(api_key) => Ok(Self::Anthropic(AnthropicClient::new(config, api_key)?)),
            None => Ok(Self::Disabled),
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Anthropic(_))
    }
}

impl TextGenerator for SuggestionBackend {
    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, GenerationError> {
        match self {
            Self::Anthropic(client) => client.generate(prompt, max_tokens).await,
            Self::Disabled => Err(GenerationError::NotConfigured),
        }
    }
}
