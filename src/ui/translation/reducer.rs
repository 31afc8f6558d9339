use crate::ui::mvi::Reducer;

use super::intent::TranslationIntent;
use super::state::TranslationStatus;

pub struct TranslationReducer;

impl Reducer for TranslationReducer {
    type State = TranslationStatus;
    type Intent = TranslationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TranslationIntent::Start => match state {
                // Only one request at a time.
                busy @ TranslationStatus::Translating { .. } => busy,
                _ => TranslationStatus::Translating { animation_tick: 0 },
            },
            TranslationIntent::AnimationTick => match state {
                TranslationStatus::Translating { animation_tick } => TranslationStatus::Translating {
                    animation_tick: animation_tick.wrapping_add(1),
                },
                other => other,
            },
            TranslationIntent::Succeeded => TranslationStatus::Idle,
            TranslationIntent::Failed {
                message,
                configuration,
            } => TranslationStatus::Failed {
                message,
                configuration,
            },
            TranslationIntent::Dismiss => match state {
                TranslationStatus::Failed { .. } => TranslationStatus::Idle,
                other => other,
            },
        }
    }
}
