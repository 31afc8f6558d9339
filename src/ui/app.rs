use crate::clipboard::TextSink;
use crate::config::{Config, CredentialStatus};
use crate::translate::{ServiceError, TranslationRequest, TranslationResult};
use crate::ui::editor::TextEditor;
use crate::ui::mvi::Reducer;
use crate::ui::session::{SessionIntent, SessionReducer, SessionState};
use crate::ui::settings::{SettingsIntent, SettingsReducer, SettingsState};
use crate::ui::translation::{TranslationIntent, TranslationReducer, TranslationStatus};

/// Which pane receives keys that are not global shortcuts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Input,
    Settings,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    config: Config,
    editor: TextEditor,
    /// Sidebar values (MVI pattern).
    settings: SettingsState,
    /// Last result and history (MVI pattern).
    session: SessionState,
    /// In-flight request and its outcome (MVI pattern).
    translation: TranslationStatus,
    /// One-line message shown in the footer, e.g. after a copy.
    notice: Option<String>,
    /// Why no API key is available, if it is not.
    key_warning: Option<String>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let settings = SettingsState::from_config(&config);
        let key_warning = key_warning(&config, &config.provider.resolve_credential());
        Self {
            should_quit: false,
            focus: Focus::Input,
            config,
            editor: TextEditor::new(),
            settings,
            session: SessionState::default(),
            translation: TranslationStatus::default(),
            notice: None,
            key_warning,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::Settings,
            Focus::Settings => Focus::Input,
        };
    }

    pub fn editor(&self) -> &TextEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut TextEditor {
        &mut self.editor
    }

    pub fn on_paste(&mut self, text: &str) {
        if self.is_busy() {
            return;
        }
        self.focus = Focus::Input;
        self.editor.insert_text(text);
    }

    // ========================================================================
    // Settings (MVI pattern)
    // ========================================================================

    pub fn settings(&self) -> &SettingsState {
        &self.settings
    }

    pub fn dispatch_settings(&mut self, intent: SettingsIntent) {
        dispatch_mvi!(self, settings, SettingsReducer, intent);
    }

    /// Model to call: the sidebar selection, else the configured default.
    pub fn selected_model(&self) -> &str {
        self.settings
            .model()
            .unwrap_or(self.config.defaults.model.as_str())
    }

    // ========================================================================
    // Session (MVI pattern)
    // ========================================================================

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Show the history pane one entry further back (PageDown).
    pub fn history_older(&mut self) {
        dispatch_mvi!(self, session, SessionReducer, SessionIntent::ScrollOlder);
    }

    /// Show the history pane one entry closer to the newest (PageUp).
    pub fn history_newer(&mut self) {
        dispatch_mvi!(self, session, SessionReducer, SessionIntent::ScrollNewer);
    }

    pub fn last_output(&self) -> Option<&str> {
        self.session
            .last_result()
            .map(|result| result.output_text.as_str())
    }

    // ========================================================================
    // Translation status (MVI pattern)
    // ========================================================================

    pub fn translation(&self) -> &TranslationStatus {
        &self.translation
    }

    pub fn is_busy(&self) -> bool {
        self.translation.is_busy()
    }

    fn dispatch_translation(&mut self, intent: TranslationIntent) {
        dispatch_mvi!(self, translation, TranslationReducer, intent);
    }

    /// Build a request from the input area. `None` while busy or when the
    /// input is blank, in which case nothing happens.
    pub fn request_translation(&mut self) -> Option<TranslationRequest> {
        if self.is_busy() {
            return None;
        }
        match TranslationRequest::new(self.editor.text(), self.settings.direction()) {
            Ok(request) => Some(request),
            Err(_) => {
                tracing::debug!("Ignoring translate on empty input");
                None
            }
        }
    }

    pub fn begin_translation(&mut self) {
        self.notice = None;
        self.dispatch_translation(TranslationIntent::Start);
    }

    pub fn finish_translation(
        &mut self,
        request: TranslationRequest,
        outcome: Result<TranslationResult, ServiceError>,
    ) {
        match outcome {
            Ok(result) => {
                let keep_history = self.settings.keep_history();
                dispatch_mvi!(
                    self,
                    session,
                    SessionReducer,
                    SessionIntent::Completed {
                        request,
                        result,
                        keep_history,
                    }
                );
                self.dispatch_translation(TranslationIntent::Succeeded);
            }
            Err(err) => {
                self.dispatch_translation(TranslationIntent::Failed {
                    configuration: err.is_configuration(),
                    message: err.to_string(),
                });
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.dispatch_translation(TranslationIntent::Dismiss);
    }

    /// The clear action: empties the input and the last result. History is
    /// kept only while the keep-history toggle is on.
    pub fn clear(&mut self) {
        if self.is_busy() {
            return;
        }
        self.editor.clear();
        self.notice = None;
        let keep_history = self.settings.keep_history();
        dispatch_mvi!(
            self,
            session,
            SessionReducer,
            SessionIntent::Clear { keep_history }
        );
        self.dispatch_translation(TranslationIntent::Dismiss);
    }

    pub fn on_tick(&mut self) {
        if self.is_busy() {
            self.dispatch_translation(TranslationIntent::AnimationTick);
        }
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    /// Copy the last output to `sink` and report the outcome in the footer.
    pub fn copy_output(&mut self, sink: &mut dyn TextSink) {
        let Some(text) = self.last_output().map(str::to_string) else {
            return;
        };
        match sink.set_text(&text) {
            Ok(()) => self.set_notice("Output copied to clipboard."),
            Err(err) => {
                tracing::warn!(error = %err, "Copy to clipboard failed");
                self.set_notice("Clipboard unavailable: select the output text to copy it.");
            }
        }
    }

    pub fn key_warning(&self) -> Option<&str> {
        self.key_warning.as_deref()
    }

    /// Record the outcome of the latest credential lookup for the sidebar.
    pub fn update_key_status(&mut self, credential: &CredentialStatus) {
        self.key_warning = key_warning(&self.config, credential);
    }
}

fn key_warning(config: &Config, credential: &CredentialStatus) -> Option<String> {
    match credential {
        CredentialStatus::Configured(_) => None,
        CredentialStatus::Unconfigured { .. } => Some(format!(
            "Set {} in your environment or .env file.",
            config.provider.api_key_env
        )),
    }
}
