use super::direction::{DirectionPreference, LayoutOrientation};
use super::service::ServiceError;

/// One user action: the text to translate and the chosen mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    text: String,
    direction: DirectionPreference,
}

impl TranslationRequest {
    /// Build a request from raw input. Surrounding whitespace is trimmed;
    /// nothing left over is an error.
    pub fn new(text: &str, direction: DirectionPreference) -> Result<Self, ServiceError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ServiceError::EmptyInput);
        }
        Ok(Self {
            text: text.to_string(),
            direction,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn direction(&self) -> DirectionPreference {
        self.direction
    }
}

/// Model output tagged with how it should be laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub output_text: String,
    pub orientation: LayoutOrientation,
    pub instruction_used: &'static str,
}
