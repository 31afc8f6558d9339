use crate::ui::mvi::UiState;

pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Whether a translation is running and how the last one ended.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TranslationStatus {
    #[default]
    Idle,

    /// A request is in flight. Editing and a second translate are blocked.
    Translating {
        /// Advances on every UI tick.
        animation_tick: u8,
    },

    /// The last attempt failed. Shown in the output pane until dismissed.
    Failed {
        message: String,
        /// Missing credential or similar; the endpoint was never called.
        configuration: bool,
    },
}

impl UiState for TranslationStatus {}

impl TranslationStatus {
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Translating { .. })
    }

    pub fn spinner(&self) -> Option<&'static str> {
        match self {
            Self::Translating { animation_tick } => {
                Some(SPINNER_FRAMES[(*animation_tick as usize) % SPINNER_FRAMES.len()])
            }
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}
