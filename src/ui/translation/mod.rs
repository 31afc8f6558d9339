//! Status of the single in-flight translation.

mod intent;
mod reducer;
mod state;

pub use intent::TranslationIntent;
pub use reducer::TranslationReducer;
pub use state::{TranslationStatus, SPINNER_FRAMES};
