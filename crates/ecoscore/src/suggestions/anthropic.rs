use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::generator::{GenerationError, TextGenerator};
use crate::config::SuggestionConfig;

pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// HTTP client for the Anthropic Messages API.
pub struct AnthropicClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl AnthropicClient {
    pub fn new(config: &SuggestionConfig, api_key: &str) -> Result<Self, GenerationError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| GenerationError::Transport(err.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.api_url.clone(),
            api_key: api_key.to_string(),
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl std::fmt::Debug for AnthropicClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [UserMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct UserMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

impl TextGenerator for AnthropicClient {
    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, GenerationError> {
        let body = MessagesRequest {
            model: &self.model,
            max_tokens,
            messages: [UserMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .http
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GenerationError::Provider {
                status: status.as_u16(),
                detail,
            });
        }

        let payload: MessagesResponse = response
            .json()
            .await
            .map_err(|err| GenerationError::MalformedResponse(err.to_string()))?;

        first_text_block(payload)
    }
}

fn map_transport_error(err: reqwest::Error) -> GenerationError {
    if err.is_timeout() {
        GenerationError::Timeout
    } else {
        GenerationError::Transport(err.to_string())
    }
}

fn first_text_block(payload: MessagesResponse) -> Result<String, GenerationError> {
    payload
        .content
        .into_iter()
        .next()
        .and_then(|block| block.text)
        .map(|text| text.trim().to_string())
        .ok_or_else(|| {
            GenerationError::MalformedResponse("response has no text content".to_string())
        })
}
