//! Sidebar settings: model, direction mode and the two toggles.

mod intent;
mod reducer;
mod state;

pub use intent::SettingsIntent;
pub use reducer::SettingsReducer;
pub use state::{SettingId, SettingsState};
