use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::translate::TranslationRequest;
use crate::ui::app::{App, Focus};
use crate::ui::settings::SettingsIntent;

/// Action the runtime performs after a key was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// Start a translation in the background.
    Translate(TranslationRequest),
    /// Put the last output on the system clipboard.
    CopyOutput,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return InputAction::None;
    }

    // History stays browsable while a request runs.
    match key.code {
        KeyCode::PageDown => {
            app.history_older();
            return InputAction::None;
        }
        KeyCode::PageUp => {
            app.history_newer();
            return InputAction::None;
        }
        _ => {}
    }

    // Input is frozen until the in-flight request finishes.
    if app.is_busy() {
        return InputAction::None;
    }

    if is_ctrl_char(key, 't') {
        return app
            .request_translation()
            .map_or(InputAction::None, InputAction::Translate);
    }
    if is_ctrl_char(key, 'l') {
        app.clear();
        return InputAction::None;
    }
    if is_ctrl_char(key, 'y') {
        if app.last_output().is_some() {
            return InputAction::CopyOutput;
        }
        return InputAction::None;
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => {
            app.toggle_focus();
            return InputAction::None;
        }
        KeyCode::Esc => {
            app.dismiss_error();
            return InputAction::None;
        }
        _ => {}
    }

    match app.focus() {
        Focus::Settings => handle_settings_key(app, key),
        Focus::Input => handle_editor_key(app, key),
    }
    InputAction::None
}

fn handle_settings_key(app: &mut App, key: KeyEvent) {
    let intent = match key.code {
        KeyCode::Up => SettingsIntent::MoveUp,
        KeyCode::Down => SettingsIntent::MoveDown,
        KeyCode::Left => SettingsIntent::Prev,
        KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => SettingsIntent::Next,
        _ => return,
    };
    app.dispatch_settings(intent);
}

fn handle_editor_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT)
    {
        return;
    }
    let editor = app.editor_mut();
    match key.code {
        KeyCode::Char(ch) => editor.insert_char(ch),
        KeyCode::Enter => editor.insert_newline(),
        KeyCode::Backspace => editor.delete_backward(),
        KeyCode::Delete => editor.delete_forward(),
        KeyCode::Left => editor.move_left(),
        KeyCode::Right => editor.move_right(),
        KeyCode::Up => editor.move_up(),
        KeyCode::Down => editor.move_down(),
        KeyCode::Home => editor.move_to_line_start(),
        KeyCode::End => editor.move_to_line_end(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
