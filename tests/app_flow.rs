mod common;

use common::{FakeTranslator, FixedIdentifier};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tarjuman::config::Config;
use tarjuman::translate::{
    DirectionPreference, LayoutOrientation, TranslationService, UR_TO_EN_INSTRUCTION,
};
use tarjuman::ui::app::{App, Focus};
use tarjuman::ui::input::{handle_key, InputAction};
use tarjuman::ui::session::HISTORY_LIMIT;
use tarjuman::ui::translation::TranslationStatus;

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Press Ctrl+T and run the resulting request the way the runtime does.
async fn translate(app: &mut App, service: &TranslationService, translator: &FakeTranslator) {
    let request = match handle_key(app, ctrl('t')) {
        InputAction::Translate(request) => request,
        other => panic!("expected translate action, got {other:?}"),
    };
    app.begin_translation();
    assert!(app.is_busy());
    let outcome = service.translate(&request, translator).await;
    app.finish_translation(request, outcome);
}

#[tokio::test]
async fn urdu_paste_translates_to_english() {
    let service = TranslationService::new(Arc::new(FixedIdentifier(Some("ur"))));
    let translator = FakeTranslator::replying("How are you?");
    let mut app = App::new(Config::default());

    app.on_paste("آپ کیسے ہیں؟");
    translate(&mut app, &service, &translator).await;

    let result = app.session().last_result().unwrap();
    assert_eq!(result.output_text, "How are you?");
    assert_eq!(result.orientation, LayoutOrientation::Ltr);
    assert_eq!(result.instruction_used, UR_TO_EN_INSTRUCTION);
    assert_eq!(app.translation(), &TranslationStatus::Idle);

    let entry = app.session().history().next().unwrap();
    assert_eq!(entry.direction, DirectionPreference::Auto);
    assert_eq!(entry.input, "آپ کیسے ہیں؟");
}

#[tokio::test]
async fn keep_history_off_records_nothing() {
    let service = TranslationService::new(Arc::new(FixedIdentifier(Some("en"))));
    let translator = FakeTranslator::replying("ہیلو");
    let mut app = App::new(Config::default());

    // Tab to the sidebar, up wraps to "keep history", toggle it off, back to input.
    handle_key(&mut app, press(KeyCode::Tab));
    handle_key(&mut app, press(KeyCode::Up));
    handle_key(&mut app, press(KeyCode::Char(' ')));
    handle_key(&mut app, press(KeyCode::Tab));
    assert_eq!(app.focus(), Focus::Input);
    assert!(!app.settings().keep_history());

    app.on_paste("Hello");
    translate(&mut app, &service, &translator).await;

    assert_eq!(app.last_output(), Some("ہیلو"));
    assert_eq!(app.session().history_len(), 0);
}

#[tokio::test]
async fn history_is_bounded_across_many_translations() {
    let service = TranslationService::new(Arc::new(FixedIdentifier(Some("en"))));
    let translator = FakeTranslator::replying("ترجمہ");
    let mut app = App::new(Config::default());

    for i in 0..(HISTORY_LIMIT + 2) {
        handle_key(&mut app, ctrl('l'));
        app.on_paste(&format!("sentence {i}"));
        translate(&mut app, &service, &translator).await;
    }

    assert_eq!(app.session().history_len(), HISTORY_LIMIT);
    assert_eq!(
        app.session().history().next().unwrap().input,
        format!("sentence {}", HISTORY_LIMIT + 1)
    );
    assert_eq!(translator.call_count(), HISTORY_LIMIT + 2);
}

#[tokio::test]
async fn failure_is_shown_and_dismissed() {
    let service = TranslationService::new(Arc::new(FixedIdentifier(None)));
    let translator = FakeTranslator::failing("model overloaded");
    let mut app = App::new(Config::default());

    app.on_paste("Hello");
    translate(&mut app, &service, &translator).await;

    let message = app.translation().error_message().unwrap().to_string();
    assert!(message.contains("model overloaded"));
    assert!(app.last_output().is_none());

    handle_key(&mut app, press(KeyCode::Esc));
    assert_eq!(app.translation(), &TranslationStatus::Idle);
}

#[test]
fn whitespace_only_input_is_a_noop() {
    let mut app = App::new(Config::default());
    app.on_paste("   \n\t");
    assert_eq!(handle_key(&mut app, ctrl('t')), InputAction::None);
    assert!(!app.is_busy());
}
