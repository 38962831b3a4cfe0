use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use std::io;
use std::path::Path;
use std::time::Duration;

/// Drive the app until the user quits or a shutdown signal arrives.
pub fn run(app: &mut App, tick_rate: Duration, shutdown: ShutdownHandle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate, shutdown.clone());
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    app.lifecycle_mut().started();

    let result = loop {
        if let Err(err) = terminal.draw(|frame| draw(frame, app)) {
            break Err(err);
        }
        if app.should_quit() {
            break Ok(());
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(app, key),
            Ok(AppEvent::Mouse(mouse)) => app.on_mouse(mouse),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::FocusGained) => app.on_focus_gained(),
            Ok(AppEvent::FocusLost) => app.on_focus_lost(),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break Ok(()),
        }
    };

    // Stop the event thread.
    shutdown.signal();
    drop(guard);
    result
}

/// End the session after the UI loop returns.
///
/// Always logs `Destroy` and writes the snapshot when `snapshot_path` is
/// given. A UI error takes precedence: the save is then best-effort and a
/// save failure is only logged.
pub fn finish_session(
    app: &mut App,
    ui_result: io::Result<()>,
    snapshot_path: Option<&Path>,
) -> anyhow::Result<()> {
    app.lifecycle_mut().destroyed();

    let saved = snapshot_path.map(|path| (path, app.snapshot().save_to(path)));

    match ui_result {
        Ok(()) => {
            if let Some((path, result)) = saved {
                result.context("Failed to save session")?;
                tracing::info!(path = %path.display(), "Session saved");
            }
            Ok(())
        }
        Err(err) => {
            match saved {
                Some((path, Ok(()))) => {
                    tracing::info!(path = %path.display(), "Session saved after UI failure")
                }
                Some((_, Err(save_err))) => {
                    tracing::warn!(error = %save_err, "Failed to save session after UI failure")
                }
                None => {}
            }
            Err(anyhow::Error::new(err).context("Terminal UI failed"))
        }
    }
}
