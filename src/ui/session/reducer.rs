use crate::ui::mvi::Reducer;

use super::intent::SessionIntent;
use super::state::{HistoryEntry, SessionState, HISTORY_LIMIT};

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::Completed {
                request,
                result,
                keep_history,
            } => {
                if keep_history {
                    state.history.push_front(HistoryEntry {
                        direction: request.direction(),
                        input: request.text().to_string(),
                        output: result.output_text.clone(),
                        orientation: result.orientation,
                    });
                    state.history.truncate(HISTORY_LIMIT);
                    state.history_offset = 0;
                }
                state.last_result = Some(result);
                state
            }
            SessionIntent::Clear { keep_history } => {
                state.last_result = None;
                if !keep_history {
                    state.history.clear();
                }
                state.history_offset = 0;
                state
            }
            SessionIntent::ScrollOlder => {
                if state.history_offset + 1 < state.history.len() {
                    state.history_offset += 1;
                }
                state
            }
            SessionIntent::ScrollNewer => {
                state.history_offset = state.history_offset.saturating_sub(1);
                state
            }
        }
    }
}
