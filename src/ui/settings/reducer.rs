use crate::ui::mvi::Reducer;

use super::intent::SettingsIntent;
use super::state::{SettingId, SettingsState};

pub struct SettingsReducer;

impl Reducer for SettingsReducer {
    type State = SettingsState;
    type Intent = SettingsIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        let rows = SettingId::ALL.len();
        match intent {
            SettingsIntent::MoveUp => {
                state.focused = if state.focused == 0 {
                    rows - 1
                } else {
                    state.focused - 1
                };
            }
            SettingsIntent::MoveDown => {
                state.focused = if state.focused + 1 >= rows {
                    0
                } else {
                    state.focused + 1
                };
            }
            SettingsIntent::Next => change_focused(&mut state, true),
            SettingsIntent::Prev => change_focused(&mut state, false),
        }
        state
    }
}

fn change_focused(state: &mut SettingsState, forward: bool) {
    match state.focused() {
        SettingId::Model => {
            let count = state.models.len();
            if count > 0 {
                state.model_index = if forward {
                    (state.model_index + 1) % count
                } else {
                    (state.model_index + count - 1) % count
                };
            }
        }
        SettingId::Direction => {
            state.direction = if forward {
                state.direction.next()
            } else {
                state.direction.prev()
            };
        }
        SettingId::ShowPrompt => state.show_prompt = !state.show_prompt,
        SettingId::KeepHistory => state.keep_history = !state.keep_history,
    }
}
