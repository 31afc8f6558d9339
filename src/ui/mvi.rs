//! Unidirectional state primitives for the UI.
//!
//! ```text
//! key / tick / finished request
//!            │
//!            ▼
//!         Intent ──→ Reducer::reduce(state, intent) ──→ State ──→ render
//! ```
//!
//! Every piece of screen state that changes in response to events (the
//! session, the translation status, the settings sidebar) is a [`UiState`]
//! updated only through its [`Reducer`].

/// Snapshot of one piece of screen state.
///
/// `Default` is the state before anything happened; it also lets callers
/// move the state out with `std::mem::take` while reducing.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Something that happened: a key press, a timer tick, a finished request.
pub trait Intent: Send + 'static {}

/// The only place a [`UiState`] changes.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Pure transition from the previous state to the next one.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
