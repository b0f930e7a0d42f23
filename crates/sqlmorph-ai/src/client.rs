//! Thin adapter around the hosted chat-completions endpoint.
//!
//! One attempt per request: upstream failures fail the whole conversion, and
//! retry policy belongs to the deployment, not this layer.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use sqlmorph_core::{LlmConfig, Result, SqlMorphError};

use crate::composer::Prompt;

/// Seam between the conversion service and the completion endpoint. The
/// production implementation is [`OpenAiClient`]; tests substitute mocks.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send a composed prompt and return the generated text, trimmed of
    /// leading and trailing whitespace.
    async fn complete(&self, prompt: &Prompt) -> Result<String>;
}

/// Chat-completions client for the OpenAI API (or any compatible endpoint).
/// Requests are deterministic: temperature is pinned to zero.
pub struct OpenAiClient {
    model: String,
    base_url: String,
    api_key: SecretString,
    client: Client,
}

impl OpenAiClient {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                SqlMorphError::Configuration(format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            client,
        })
    }

    pub fn model_name(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, prompt: &Prompt) -> Result<String> {
        let request = ChatCompletionsRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: prompt.system.clone(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt.task.clone(),
                },
            ],
            temperature: 0.0,
        };

        tracing::debug!(model = %self.model, task_bytes = prompt.task.len(), "sending completion request");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header(
                "Authorization",
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                SqlMorphError::Completion(format!("failed to reach completion endpoint: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SqlMorphError::Completion(format!(
                "completion endpoint error ({status}): {error_text}"
            )));
        }

        let parsed: ChatCompletionsResponse = response.json().await.map_err(|e| {
            SqlMorphError::Completion(format!("failed to parse completion response: {e}"))
        })?;

        extract_content(parsed)
    }
}

fn extract_content(response: ChatCompletionsResponse) -> Result<String> {
    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| SqlMorphError::Completion("completion response contained no choices".into()))?;

    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(SqlMorphError::Completion(
            "completion response was empty".into(),
        ));
    }
    Ok(trimmed.to_string())
}

#[derive(Debug, Serialize)]
struct ChatCompletionsRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionsResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}
