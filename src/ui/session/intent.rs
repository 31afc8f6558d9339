use crate::translate::{TranslationRequest, TranslationResult};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SessionIntent {
    /// A translation came back. `keep_history` is the sidebar toggle at that moment.
    Completed {
        request: TranslationRequest,
        result: TranslationResult,
        keep_history: bool,
    },
    /// The clear action. History survives only while `keep_history` is on.
    Clear { keep_history: bool },
    /// Start the history pane one entry further back.
    ScrollOlder,
    /// Start the history pane one entry closer to the newest.
    ScrollNewer,
}

impl Intent for SessionIntent {}
