//! Orchestration of a single translation: validate, resolve direction, call
//! the model, tag the result.

use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;

use crate::config::{Config, CredentialStatus};

use super::detect::{LanguageIdentifier, WhatlangIdentifier};
use super::direction::{resolve, Resolution};
use super::groq::GroqTranslator;
use super::translator::{TranslateError, Translator};
use super::types::{TranslationRequest, TranslationResult};

/// Errors surfaced by the translate action.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Missing credential or unusable client setup. The endpoint is not called.
    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("Nothing to translate: input is empty")]
    EmptyInput,

    #[error("Translation failed: {0}")]
    Remote(#[from] TranslateError),
}

impl ServiceError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}

/// Build the remote translator for `model`, refusing when no credential is available.
pub fn remote_translator(
    config: &Config,
    model: &str,
    credential: CredentialStatus,
) -> Result<GroqTranslator, ServiceError> {
    match credential {
        CredentialStatus::Configured(key) => {
            GroqTranslator::new(&config.provider, &config.defaults, model, key).map_err(|e| {
                ServiceError::Configuration {
                    reason: e.to_string(),
                }
            })
        }
        CredentialStatus::Unconfigured { reason } => {
            tracing::warn!(reason = %reason, "Refusing to translate without an API key");
            Err(ServiceError::Configuration {
                reason: format!(
                    "{}. Set {} in your environment or .env file.",
                    reason, config.provider.api_key_env
                ),
            })
        }
    }
}

/// Runs translation requests against a [`Translator`].
#[derive(Clone)]
pub struct TranslationService {
    identifier: Arc<dyn LanguageIdentifier>,
}

impl Default for TranslationService {
    fn default() -> Self {
        Self::new(Arc::new(WhatlangIdentifier))
    }
}

impl TranslationService {
    pub fn new(identifier: Arc<dyn LanguageIdentifier>) -> Self {
        Self { identifier }
    }

    /// Pick instruction and orientation for `request`.
    pub fn resolve(&self, request: &TranslationRequest) -> Resolution {
        resolve(request.text(), request.direction(), self.identifier.as_ref())
    }

    /// Translate `request` with exactly one call to `translator`.
    pub async fn translate(
        &self,
        request: &TranslationRequest,
        translator: &dyn Translator,
    ) -> Result<TranslationResult, ServiceError> {
        let resolution = self.resolve(request);
        let instruction = resolution.instruction.text();

        tracing::info!(
            preference = request.direction().label(),
            instruction = ?resolution.instruction,
            input_chars = request.text().chars().count(),
            "Translating"
        );

        let start = Instant::now();
        let output_text = translator
            .translate(instruction, request.text())
            .await
            .inspect_err(|err| tracing::warn!(error = %err, "Translation failed"))?;

        tracing::info!(
            latency_ms = start.elapsed().as_millis() as u64,
            output_chars = output_text.chars().count(),
            "Translation finished"
        );

        Ok(TranslationResult {
            output_text,
            orientation: resolution.orientation,
            instruction_used: instruction,
        })
    }
}
