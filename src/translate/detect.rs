//! Language identification.

use thiserror::Error;
use whatlang::Lang;

/// Code reported when identification fails.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DetectionError {
    #[error("input is empty")]
    EmptyInput,
    #[error("no language features found in input")]
    Undetermined,
}

/// Best-guess language of a piece of text.
pub trait LanguageIdentifier: Send + Sync {
    /// Returns a lowercase language code such as "en" or "ur".
    fn identify(&self, text: &str) -> Result<String, DetectionError>;
}

/// Run `identifier`, mapping any failure to [`UNKNOWN_LANGUAGE`].
pub fn identify_or_unknown(identifier: &dyn LanguageIdentifier, text: &str) -> String {
    match identifier.identify(text) {
        Ok(code) => code,
        Err(err) => {
            tracing::debug!(error = %err, "Language identification failed");
            UNKNOWN_LANGUAGE.to_string()
        }
    }
}

/// Trigram/script based identifier backed by `whatlang`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhatlangIdentifier;

impl LanguageIdentifier for WhatlangIdentifier {
    fn identify(&self, text: &str) -> Result<String, DetectionError> {
        if text.trim().is_empty() {
            return Err(DetectionError::EmptyInput);
        }
        let info = whatlang::detect(text).ok_or(DetectionError::Undetermined)?;
        Ok(short_code(info.lang()).to_string())
    }
}

/// ISO 639-1 code where one exists for the languages this tool cares about,
/// otherwise whatlang's ISO 639-3 code.
fn short_code(lang: Lang) -> &'static str {
    match lang {
        Lang::Eng => "en",
        Lang::Urd => "ur",
        Lang::Pes => "fa",
        Lang::Ara => "ar",
        Lang::Hin => "hi",
        Lang::Fra => "fr",
        Lang::Deu => "de",
        Lang::Spa => "es",
        other => other.code(),
    }
}
