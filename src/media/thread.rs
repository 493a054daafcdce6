use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use crate::player::PlayerId;

use super::endpoint::MediaEvent;
use super::sink::create_sink;
use super::types::MediaCmd;

/// How often the thread checks whether the current sink ran dry.
const END_POLL: Duration = Duration::from_millis(200);

/// Spawn the media thread for `player`.
///
/// The thread opens the default output stream and reports the outcome on
/// `ready` before handling any command.
pub(super) fn spawn_media_thread(
    player: PlayerId,
    rx: Receiver<MediaCmd>,
    events: Sender<MediaEvent>,
    ready: Sender<Result<(), String>>,
    initial_volume: f32,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut stream = match OutputStreamBuilder::open_default_stream() {
            Ok(stream) => {
                let _ = ready.send(Ok(()));
                stream
            }
            Err(e) => {
                let _ = ready.send(Err(e.to_string()));
                return;
            }
        };
        // rodio logs to stderr when OutputStream is dropped, which would
        // scribble over the TUI.
        stream.log_on_drop(false);

        let mut state = MediaState {
            player,
            stream,
            source: None,
            sink: None,
            paused: true,
            volume: initial_volume,
            generation: 0,
        };
        pump(&mut state, &rx, &events);
    })
}

/// What the command loop drives: the rodio state, or a double in tests.
pub(super) trait Driver {
    /// Apply one command. Returns `false` once the thread should stop.
    fn apply(&mut self, cmd: MediaCmd) -> bool;

    /// The end-of-track event, at most once per finished playback.
    fn take_ended(&mut self) -> Option<MediaEvent>;
}

/// Feed commands to `driver` until quit or disconnect.
///
/// End of track is checked after every wakeup, not only on idle timeouts,
/// so a steady stream of commands cannot hide it.
pub(super) fn pump<D: Driver>(driver: &mut D, rx: &Receiver<MediaCmd>, events: &Sender<MediaEvent>) {
    loop {
        match rx.recv_timeout(END_POLL) {
            Ok(cmd) => {
                if !driver.apply(cmd) {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        if let Some(ev) = driver.take_ended() {
            if events.send(ev).is_err() {
                break;
            }
        }
    }
}

struct MediaState {
    player: PlayerId,
    stream: OutputStream,
    source: Option<String>,
    sink: Option<Sink>,
    paused: bool,
    volume: f32,
    /// Generation of the last load or play command.
    generation: u64,
}

impl MediaState {
    fn load(&mut self, source: String) {
        if let Some(old) = self.sink.take() {
            old.stop();
        }
        self.paused = true;
        self.sink = self.open(&source);
        self.source = Some(source);
    }

    fn play(&mut self) {
        let needs_rewind = self.sink.as_ref().map(Sink::empty).unwrap_or(true);
        if needs_rewind {
            // Seek to start: a finished or failed sink is rebuilt from the source.
            let Some(source) = self.source.clone() else {
                return;
            };
            self.sink = self.open(&source);
        }

        if let Some(ref s) = self.sink {
            s.play();
            self.paused = false;
        }
    }

    fn pause(&mut self) {
        if let Some(ref s) = self.sink {
            s.pause();
        }
        self.paused = true;
    }

    fn set_volume(&mut self, level: f32) {
        self.volume = level;
        if let Some(ref s) = self.sink {
            s.set_volume(level);
        }
    }

    fn finished(&self) -> bool {
        !self.paused && self.sink.as_ref().map(Sink::empty).unwrap_or(false)
    }

    fn open(&self, source: &str) -> Option<Sink> {
        match create_sink(&self.stream, source, self.volume) {
            Ok(sink) => {
                tracing::debug!(player = %self.player, source, "loaded source");
                Some(sink)
            }
            Err(e) => {
                tracing::error!(player = %self.player, error = %e, "cannot load source");
                None
            }
        }
    }

    fn quit(&mut self, fade_out_ms: u64) {
        if let Some(ref s) = self.sink {
            if !self.paused {
                fade_out_sink(s, self.volume, fade_out_ms);
            }
            s.stop();
        }
    }
}

impl Driver for MediaState {
    fn apply(&mut self, cmd: MediaCmd) -> bool {
        match cmd {
            MediaCmd::Load { source, generation } => {
                self.generation = generation;
                self.load(source);
            }
            MediaCmd::Play { generation } => {
                self.generation = generation;
                self.play();
            }
            MediaCmd::Pause => self.pause(),
            MediaCmd::SetVolume(v) => self.set_volume(v),
            MediaCmd::Quit { fade_out_ms } => {
                self.quit(fade_out_ms);
                return false;
            }
        }
        true
    }

    /// Marking the state paused keeps the event from firing again until
    /// playback is restarted.
    fn take_ended(&mut self) -> Option<MediaEvent> {
        if !self.finished() {
            return None;
        }
        self.paused = true;
        tracing::debug!(player = %self.player, generation = self.generation, "track ended");
        Some(MediaEvent::Ended {
            player: self.player.clone(),
            generation: self.generation,
        })
    }
}

fn fade_out_sink(sink: &Sink, from: f32, fade_out_ms: u64) {
    if fade_out_ms == 0 {
        sink.set_volume(0.0);
        return;
    }
    let steps: u64 = 20;
    let step_ms = (fade_out_ms / steps).max(1);
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        sink.set_volume(from * (1.0 - t));
        thread::sleep(Duration::from_millis(step_ms));
    }
    sink.set_volume(0.0);
}
