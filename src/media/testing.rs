//! In-memory endpoint that records every command it receives.

use super::endpoint::MediaEndpoint;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Load(String),
    Play,
    Pause,
    Volume(f32),
}

#[derive(Debug)]
pub struct RecordingEndpoint {
    pub calls: Vec<Call>,
    volume: f32,
    generation: u64,
}

impl Default for RecordingEndpoint {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            volume: 1.0,
            generation: 0,
        }
    }
}

impl RecordingEndpoint {
    /// Source of the most recent `load`, if any.
    pub fn loaded(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::Load(s) => Some(s.as_str()),
            _ => None,
        })
    }
}

impl MediaEndpoint for RecordingEndpoint {
    fn load(&mut self, source: &str) {
        self.generation += 1;
        self.calls.push(Call::Load(source.to_string()));
    }

    fn play(&mut self) {
        self.generation += 1;
        self.calls.push(Call::Play);
    }

    fn pause(&mut self) {
        self.calls.push(Call::Pause);
    }

    fn set_volume(&mut self, level: f32) {
        self.volume = level;
        self.calls.push(Call::Volume(level));
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn generation(&self) -> u64 {
        self.generation
    }
}
