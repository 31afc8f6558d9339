use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SettingsIntent {
    MoveUp,
    MoveDown,
    /// Next model or direction, or flip a toggle.
    Next,
    /// Previous model or direction, or flip a toggle.
    Prev,
}

impl Intent for SettingsIntent {}
