//! Per-session translation memory: the latest result and a bounded history.

mod intent;
mod reducer;
mod state;

pub use intent::SessionIntent;
pub use reducer::SessionReducer;
pub use state::{HistoryEntry, SessionState, HISTORY_LIMIT};
