//! Utilities for creating `rodio` sinks from source references.
//!
//! Opening and decoding is kept separate from connecting to the output so
//! the failure modes can be checked without an audio device.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use rodio::decoder::DecoderError;
use rodio::{Decoder, OutputStream, Sink};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecoderError,
    },
}

/// Open and probe the file behind `source`.
pub(super) fn open_source(source: &str) -> Result<Decoder<BufReader<File>>, MediaError> {
    let path = PathBuf::from(source);
    let file = File::open(&path).map_err(|source| MediaError::Open {
        path: path.clone(),
        source,
    })?;

    Decoder::new(BufReader::new(file)).map_err(|source| MediaError::Decode { path, source })
}

/// Create a paused `Sink` playing `source` from its start at `volume`.
pub(super) fn create_sink(
    stream: &OutputStream,
    source: &str,
    volume: f32,
) -> Result<Sink, MediaError> {
    let decoder = open_source(source)?;

    let sink = Sink::connect_new(stream.mixer());
    sink.set_volume(volume);
    sink.append(decoder);
    sink.pause();
    Ok(sink)
}
