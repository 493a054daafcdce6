use std::env;
use std::path::PathBuf;
use std::sync::mpsc;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::media::MediaEvent;

mod event_loop;
mod logging;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings()?;

    if let Err(e) = logging::init(&settings.logging) {
        // Logging is optional; keep going without it.
        eprintln!("encore: {e}");
    }

    let library_dir: Option<PathBuf> = env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| settings.library.dir.clone());

    tracing::info!(
        players = settings.players.len(),
        bridge = %settings.bridge.target,
        library = ?library_dir,
        "starting"
    );

    let (media_tx, media_rx) = mpsc::channel::<MediaEvent>();
    let mut app = match startup::build_app(&settings, library_dir.as_deref(), &media_tx) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "startup failed");
            return Err(e.into());
        }
    };

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &media_rx);
    let restored = restore_terminal(&mut terminal);

    wind_down(run_result, restored, || {
        startup::shutdown(&app, settings.audio.quit_fade_out_ms);
        tracing::info!("stopped");
    })
}

type BoxResult = Result<(), Box<dyn std::error::Error>>;

/// Attempt every restore step even when an earlier one fails.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> BoxResult {
    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();
    raw?;
    screen?;
    cursor?;
    Ok(())
}

/// Run `shutdown` unconditionally, then report the loop error before any
/// terminal restore error.
fn wind_down(run_result: BoxResult, restored: BoxResult, shutdown: impl FnOnce()) -> BoxResult {
    shutdown();
    run_result?;
    restored
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn failed(msg: &str) -> BoxResult {
        Err(msg.into())
    }

    #[test]
    fn wind_down_always_shuts_down() {
        for (run, restored) in [
            (Ok(()), Ok(())),
            (Ok(()), failed("restore")),
            (failed("loop"), Ok(())),
            (failed("loop"), failed("restore")),
        ] {
            let stopped = Cell::new(false);
            let _ = wind_down(run, restored, || stopped.set(true));
            assert!(stopped.get());
        }
    }

    #[test]
    fn wind_down_prefers_the_loop_error() {
        let err = wind_down(failed("loop"), failed("restore"), || {}).unwrap_err();
        assert_eq!(err.to_string(), "loop");

        let err = wind_down(Ok(()), failed("restore"), || {}).unwrap_err();
        assert_eq!(err.to_string(), "restore");

        assert!(wind_down(Ok(()), Ok(()), || {}).is_ok());
    }
}
