//! Playback primitive consumed by player controllers.
//!
//! `MediaEndpoint` is the seam: controllers only ever load, play, pause and
//! set volume through it. The rodio-backed implementation runs one thread per
//! player and reports natural end-of-track as a `MediaEvent`.

mod endpoint;
mod output;
mod sink;
mod thread;
mod types;

pub use endpoint::{MediaEndpoint, MediaEvent};
pub use output::RodioEndpoint;
pub use sink::MediaError;

#[cfg(test)]
pub(crate) mod testing;
