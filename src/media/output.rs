use std::sync::Mutex;
use std::sync::mpsc::{self, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::player::PlayerId;

use super::endpoint::{MediaEndpoint, MediaEvent};
use super::thread::spawn_media_thread;
use super::types::MediaCmd;

/// `MediaEndpoint` backed by a rodio output stream on a dedicated thread.
pub struct RodioEndpoint {
    player: PlayerId,
    tx: Sender<MediaCmd>,
    volume: f32,
    generation: u64,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl RodioEndpoint {
    /// Open the default audio output for `player`.
    ///
    /// Fails when no output device can be opened. End-of-track notifications
    /// are delivered on `events`.
    pub fn open(player: PlayerId, events: Sender<MediaEvent>, initial_volume: f32) -> Result<Self> {
        let (tx, rx) = mpsc::channel::<MediaCmd>();
        let (ready_tx, ready_rx) = mpsc::channel();

        let handle = spawn_media_thread(player.clone(), rx, events, ready_tx, initial_volume);

        match ready_rx.recv() {
            Ok(Ok(())) => {}
            Ok(Err(reason)) => {
                let _ = handle.join();
                return Err(Error::OutputDevice { player, reason });
            }
            Err(_) => {
                let _ = handle.join();
                return Err(Error::OutputDevice {
                    player,
                    reason: "media thread exited during startup".to_string(),
                });
            }
        }

        Ok(Self {
            player,
            tx,
            volume: initial_volume,
            generation: 0,
            join: Mutex::new(Some(handle)),
        })
    }

    fn send(&self, cmd: MediaCmd) {
        if self.tx.send(cmd).is_err() {
            tracing::warn!(player = %self.player, "media thread is gone");
        }
    }

    /// Fade out, stop the thread and wait for it.
    pub fn quit_softly(&self, fade_out: Duration) {
        self.send(MediaCmd::Quit {
            fade_out_ms: fade_out.as_millis() as u64,
        });

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}

impl MediaEndpoint for RodioEndpoint {
    fn load(&mut self, source: &str) {
        self.generation += 1;
        self.send(MediaCmd::Load {
            source: source.to_string(),
            generation: self.generation,
        });
    }

    fn play(&mut self) {
        self.generation += 1;
        self.send(MediaCmd::Play {
            generation: self.generation,
        });
    }

    fn pause(&mut self) {
        self.send(MediaCmd::Pause);
    }

    fn set_volume(&mut self, level: f32) {
        self.volume = level;
        self.send(MediaCmd::SetVolume(level));
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn generation(&self) -> u64 {
        self.generation
    }
}
