//! Chat-completion client

use crate::delegate::prompt::build_prompt;
use crate::types::{AcuError, Result};
use serde::{Deserialize, Serialize};

/// Default chat-completion endpoint (OpenRouter)
pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";

/// Where to send the document and which model should answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
        }
    }
}

impl ModelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the endpoint URL
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Builder method: set the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// One chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Request body of a chat-completion call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl CompletionRequest {
    /// A request carrying the prompt for `raw` as a single user message
    pub fn for_document(model: &str, raw: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: build_prompt(raw),
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Extract the first choice's message content from a response body
///
/// The content is whitespace-trimmed and otherwise returned verbatim.
pub fn parse_completion(body: &str) -> Result<String> {
    let response: CompletionResponse = serde_json::from_str(body)
        .map_err(|e| AcuError::InvalidResponse(format!("not a chat completion: {}", e)))?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| AcuError::InvalidResponse("response has no choices".to_string()))?;

    let content = choice
        .message
        .content
        .ok_or_else(|| AcuError::InvalidResponse("first choice has no content".to_string()))?;

    Ok(content.trim().to_string())
}

/// Client for the model collaborator
#[derive(Debug, Clone)]
pub struct ModelClient {
    config: ModelConfig,
    http: reqwest::Client,
}

impl ModelClient {
    pub fn new(config: ModelConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Send `raw` to the model and return its answer
    ///
    /// # Arguments
    /// * `raw` - The full input document
    /// * `credential` - Bearer token for the endpoint, used for this call only
    pub async fn delegate(&self, raw: &str, credential: &str) -> Result<String> {
        if credential.trim().is_empty() {
            return Err(AcuError::InvalidConfig("no API key provided".to_string()));
        }

        let request = CompletionRequest::for_document(&self.config.model, raw);
        log::info!(
            "Sending {} bytes to model {} at {}",
            raw.len(),
            self.config.model,
            self.config.endpoint
        );

        let response = self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(credential)
            .json(&request)
            .send()
            .await
            .map_err(|e| AcuError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AcuError::Transport(format!("failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(AcuError::Api {
                status: status.as_u16(),
                body,
            });
        }

        log::debug!("Model responded with {} bytes", body.len());
        parse_completion(&body)
    }
}
