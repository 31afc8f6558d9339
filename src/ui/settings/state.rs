use crate::config::Config;
use crate::translate::DirectionPreference;
use crate::ui::mvi::UiState;

/// Rows of the settings sidebar, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingId {
    Model,
    Direction,
    ShowPrompt,
    KeepHistory,
}

impl SettingId {
    pub const ALL: [SettingId; 4] = [
        SettingId::Model,
        SettingId::Direction,
        SettingId::ShowPrompt,
        SettingId::KeepHistory,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SettingId::Model => "Model",
            SettingId::Direction => "Translation direction",
            SettingId::ShowPrompt => "Show system prompt",
            SettingId::KeepHistory => "Keep translation history",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsState {
    pub(super) models: Vec<String>,
    pub(super) model_index: usize,
    pub(super) direction: DirectionPreference,
    pub(super) show_prompt: bool,
    pub(super) keep_history: bool,
    pub(super) focused: usize,
}

impl UiState for SettingsState {}

impl SettingsState {
    /// Initial sidebar values from the `[defaults]` and `[provider]` tables.
    pub fn from_config(config: &Config) -> Self {
        let models = config.provider.models.clone();
        let model_index = models
            .iter()
            .position(|m| m == &config.defaults.model)
            .unwrap_or(0);
        Self {
            models,
            model_index,
            direction: config.defaults.direction,
            show_prompt: config.defaults.show_prompt,
            keep_history: config.defaults.keep_history,
            focused: 0,
        }
    }

    pub fn model(&self) -> Option<&str> {
        self.models.get(self.model_index).map(String::as_str)
    }

    pub fn direction(&self) -> DirectionPreference {
        self.direction
    }

    pub fn show_prompt(&self) -> bool {
        self.show_prompt
    }

    pub fn keep_history(&self) -> bool {
        self.keep_history
    }

    pub fn focused(&self) -> SettingId {
        SettingId::ALL[self.focused % SettingId::ALL.len()]
    }
}
