use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::time::Duration;

use tokio::runtime::Runtime;

use crate::clipboard::SystemClipboard;
use crate::config::Config;
use crate::translate::{remote_translator, TranslationRequest, TranslationService};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Spinner frame rate.
const TICK_RATE: Duration = Duration::from_millis(100);

pub fn run(config: Config) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(config);
    let events = EventHandler::new(TICK_RATE);
    let service = TranslationService::default();
    let mut clipboard = SystemClipboard::new();

    tracing::info!(model = app.selected_model(), "Translator UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => match handle_key(&mut app, key) {
                InputAction::Translate(request) => {
                    start_translation(&runtime, &mut app, &service, request, events.sender())
                }
                InputAction::CopyOutput => app.copy_output(&mut clipboard),
                InputAction::None => {}
            },
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(),
            // The next draw picks up the new size.
            Ok(AppEvent::Resize(..)) => {}
            Ok(AppEvent::TranslationFinished { request, outcome }) => {
                app.finish_translation(request, outcome)
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(events);
    drop(guard);
    // Do not wait for an in-flight request on quit.
    runtime.shutdown_background();
    tracing::info!("Translator UI stopped");
    Ok(())
}

/// Check the credential, then run the request on the runtime. The result
/// comes back as [`AppEvent::TranslationFinished`].
fn start_translation(
    runtime: &Runtime,
    app: &mut App,
    service: &TranslationService,
    request: TranslationRequest,
    sender: Sender<AppEvent>,
) {
    let credential = app.config().provider.resolve_credential();
    app.update_key_status(&credential);

    let translator = match remote_translator(app.config(), app.selected_model(), credential) {
        Ok(translator) => translator,
        Err(err) => {
            app.finish_translation(request, Err(err));
            return;
        }
    };

    tracing::info!(
        model = translator.model(),
        direction = request.direction().label(),
        input_chars = request.text().chars().count(),
        "Starting translation"
    );
    app.begin_translation();
    let service = service.clone();
    runtime.spawn(async move {
        let outcome = service.translate(&request, &translator).await;
        if sender
            .send(AppEvent::TranslationFinished { request, outcome })
            .is_err()
        {
            tracing::debug!("UI closed before translation finished");
        }
    });
}
