use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum TranslationIntent {
    Start,
    AnimationTick,
    Succeeded,
    Failed { message: String, configuration: bool },
    /// Drop a shown error (Esc, clear, or new input).
    Dismiss,
}

impl Intent for TranslationIntent {}
