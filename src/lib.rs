//! English ↔ Urdu translator for the terminal.

pub mod clipboard;
pub mod config;
pub mod logging;
pub mod translate;
pub mod ui;
