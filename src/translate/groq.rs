//! Chat-completions client for Groq and other OpenAI-compatible providers.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::config::{Defaults, ProviderConfig, SecureString};

use super::translator::{TranslateError, Translator};

/// Remote translator calling `{base_url}/chat/completions`.
pub struct GroqTranslator {
    client: Client,
    endpoint: String,
    model: String,
    api_key: SecureString,
    temperature: Option<f32>,
}

impl GroqTranslator {
    /// Build a client for `model` using the provider settings and an already
    /// resolved API key.
    pub fn new(
        provider: &ProviderConfig,
        defaults: &Defaults,
        model: &str,
        api_key: SecureString,
    ) -> Result<Self, TranslateError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(defaults.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(
                defaults.connect_timeout_seconds,
            )))
            .build()
            .map_err(TranslateError::Client)?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", provider.base_url.trim_end_matches('/')),
            model: model.to_string(),
            api_key,
            temperature: provider.temperature,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_request<'a>(&'a self, instruction: &'a str, text: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: instruction,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
            temperature: self.temperature,
        }
    }
}

#[async_trait]
impl Translator for GroqTranslator {
    async fn translate(&self, instruction: &str, text: &str) -> Result<String, TranslateError> {
        let request_body = self.build_request(instruction, text);

        tracing::debug!(
            endpoint = %self.endpoint,
            model = %self.model,
            input_chars = text.chars().count(),
            "Sending chat completion request"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key.expose()))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| TranslateError::Connection {
                endpoint: self.endpoint.clone(),
                source: e,
            })?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .unwrap_or_else(|_| "<read error>".to_string());
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                latency_ms,
                "Chat completion API error"
            );
            return Err(TranslateError::Api {
                status: status.as_u16(),
                message: error_message(&response_text),
            });
        }

        let body: ChatResponse = serde_json::from_str(&response_text)
            .map_err(|e| TranslateError::Parse(e.to_string()))?;

        let output = extract_text(body)?;
        tracing::debug!(
            latency_ms,
            output_chars = output.chars().count(),
            "Chat completion finished"
        );
        Ok(output)
    }
}

/// First choice's content, trimmed. A choice without content yields "".
fn extract_text(response: ChatResponse) -> Result<String, TranslateError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(TranslateError::EmptyResponse)?;
    Ok(choice
        .message
        .content
        .unwrap_or_default()
        .trim()
        .to_string())
}

/// Pull `error.message` out of an OpenAI-style error body, else return the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
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

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}
