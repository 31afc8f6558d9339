//! Translation core.
//!
//! ```text
//! TranslationRequest ──→ resolve (direction) ──→ Translator ──→ TranslationResult
//!                            │
//!                            └── LanguageIdentifier (Auto only)
//! ```

pub mod detect;
pub mod direction;
pub mod groq;
pub mod service;
pub mod translator;
pub mod types;

pub use detect::{
    identify_or_unknown, DetectionError, LanguageIdentifier, WhatlangIdentifier, UNKNOWN_LANGUAGE,
};
pub use direction::{
    is_urdu_like, resolve, DirectionPreference, Instruction, LayoutOrientation, Resolution,
    EN_TO_UR_INSTRUCTION, UR_TO_EN_INSTRUCTION,
};
pub use groq::GroqTranslator;
pub use service::{remote_translator, ServiceError, TranslationService};
pub use translator::{TranslateError, Translator};
pub use types::{TranslationRequest, TranslationResult};
