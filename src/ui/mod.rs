//! Terminal front end.
//!
//! ```text
//! EventHandler (input thread) ──→ App (MVI states) ──→ render::draw
//!         ↑                             │
//!         └── TranslationFinished ◄── tokio task (one at a time)
//! ```

pub mod app;
pub mod bidi;
pub mod editor;
pub mod events;
pub mod footer;
pub mod header;
pub mod history;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod session;
pub mod settings;
pub mod sidebar;
pub mod terminal_guard;
pub mod theme;
pub mod translation;

pub use runtime::run;
