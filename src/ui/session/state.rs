use std::collections::VecDeque;

use crate::translate::{DirectionPreference, LayoutOrientation, TranslationResult};
use crate::ui::mvi::UiState;

/// Most entries kept in the history pane.
pub const HISTORY_LIMIT: usize = 10;

/// A finished translation as shown in the history pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The mode selected when the translation ran, not the resolved one.
    pub direction: DirectionPreference,
    pub input: String,
    pub output: String,
    pub orientation: LayoutOrientation,
}

/// Lives for one run of the program; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub(super) last_result: Option<TranslationResult>,
    /// Newest entry at the front.
    pub(super) history: VecDeque<HistoryEntry>,
    /// Index of the first entry shown in the history pane.
    pub(super) history_offset: usize,
}

impl UiState for SessionState {}

impl SessionState {
    pub fn last_result(&self) -> Option<&TranslationResult> {
        self.last_result.as_ref()
    }

    /// Entries newest first.
    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Always less than [`history_len`](Self::history_len) unless history is empty.
    pub fn history_offset(&self) -> usize {
        self.history_offset
    }
}
