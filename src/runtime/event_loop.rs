use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Focus};
use crate::config;
use crate::library::collect_local_files;
use crate::media::{MediaEndpoint, MediaEvent};
use crate::ui;

/// Main terminal event loop: dispatches media events, draws, and handles
/// input. Returns `Ok(())` when shutdown is requested.
pub fn run<M: MediaEndpoint>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App<M>,
    media_rx: &mpsc::Receiver<MediaEvent>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        while let Ok(ev) = media_rx.try_recv() {
            handle_media_event(ev, app);
        }

        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app) {
                    break;
                }
            }
        }
    }

    Ok(())
}

pub(super) fn handle_media_event<M: MediaEndpoint>(ev: MediaEvent, app: &mut App<M>) {
    match ev {
        MediaEvent::Ended { player, generation } => match app.deck.get_mut(&player) {
            Some(p) => p.on_ended(generation),
            None => tracing::warn!(%player, "end of track from unknown player"),
        },
    }
}

/// Handle one key press. Returns `true` when the user asked to quit.
pub(super) fn handle_key_event<M: MediaEndpoint>(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App<M>,
) -> bool {
    if app.input.is_some() {
        handle_input_key(key, settings, app);
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Char('j') | KeyCode::Down => app.next(),
        KeyCode::Char('k') | KeyCode::Up => app.prev(),
        _ => match app.focus {
            Focus::Player(_) => handle_player_key(key, settings, app),
            Focus::Library => handle_library_key(key, app),
        },
    }

    false
}

fn handle_player_key<M: MediaEndpoint>(key: KeyEvent, settings: &config::Settings, app: &mut App<M>) {
    let step = settings.audio.volume_step;
    match key.code {
        KeyCode::Enter => app.activate_row(),
        KeyCode::Char('a') => app.begin_input(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.nudge_volume(step),
        KeyCode::Char('-') => app.nudge_volume(-step),
        KeyCode::Char(' ') | KeyCode::Char('p') => {
            if let Some(p) = app.focused_player_mut() {
                p.toggle_play_pause();
                if p.is_empty() {
                    app.status = Some("no songs in the playlist to play".to_string());
                }
            }
        }
        KeyCode::Char('l') | KeyCode::Right => {
            if let Some(p) = app.focused_player_mut() {
                p.play_next();
            }
        }
        KeyCode::Char('h') | KeyCode::Left => {
            if let Some(p) = app.focused_player_mut() {
                p.play_previous();
            }
        }
        _ => {}
    }
}

fn handle_library_key<M: MediaEndpoint>(key: KeyEvent, app: &mut App<M>) {
    let routed = match key.code {
        KeyCode::Enter => app.queue_selected(),
        KeyCode::Char(c @ '1'..='9') => {
            let pos = c as usize - '1' as usize;
            app.queue_selected_to(pos)
        }
        _ => Ok(()),
    };

    if let Err(e) = routed {
        tracing::warn!(error = %e, "library pick not queued");
        app.status = Some(e.to_string());
    }
}

fn handle_input_key<M: MediaEndpoint>(key: KeyEvent, settings: &config::Settings, app: &mut App<M>) {
    match key.code {
        KeyCode::Esc => app.cancel_input(),
        KeyCode::Backspace => app.pop_input_char(),
        KeyCode::Enter => {
            let Some(path) = app.take_input() else {
                return;
            };
            match collect_local_files(&path, &settings.library) {
                Ok(files) => {
                    let count = files.len();
                    if let Some(p) = app.focused_player_mut() {
                        p.add_local_files(&files);
                    }
                    app.status = Some(format!("added {count} file(s) from {}", path.display()));
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "cannot add files");
                    app.status = Some(e.to_string());
                }
            }
        }
        KeyCode::Char(c) => {
            if !c.is_control() {
                app.push_input_char(c);
            }
        }
        _ => {}
    }
}
