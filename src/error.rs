//! Crate-wide error type.

use std::path::PathBuf;

use thiserror::Error;

use crate::player::PlayerId;

#[derive(Debug, Error)]
pub enum Error {
    /// The default audio output could not be opened for a player.
    #[error("player {player}: no audio output device ({reason})")]
    OutputDevice { player: PlayerId, reason: String },

    /// A bridge or key binding referenced a player that does not exist.
    #[error("unknown player `{0}`")]
    UnknownPlayer(PlayerId),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to set up logging: {0}")]
    Logging(String),

    #[error("{}: no such file or directory", .0.display())]
    MissingPath(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
