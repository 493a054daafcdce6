use std::path::PathBuf;

use serde::Deserialize;

use crate::library::TrackDescriptor;
use crate::player::PlayerId;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/encore/config.toml` or `~/.config/encore/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `ENCORE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub ui: UiSettings,
    pub library: LibrarySettings,
    pub players: Vec<PlayerSettings>,
    pub bridge: BridgeSettings,
    pub logging: LoggingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            audio: AudioSettings::default(),
            ui: UiSettings::default(),
            library: LibrarySettings::default(),
            players: vec![PlayerSettings::default()],
            bridge: BridgeSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Volume every player starts with, between 0.0 and 1.0.
    pub initial_volume: f32,
    /// Amount added or removed by one volume key press.
    pub volume_step: f32,
    /// Fade-out duration when quitting (milliseconds).
    /// Set to 0 to stop immediately.
    pub quit_fade_out_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            initial_volume: 1.0,
            volume_step: 0.05,
            quit_fade_out_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Whether to show the cover image reference under the artist line.
    pub show_cover: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ encore ~ ".to_string(),
            show_cover: true,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackDisplayField {
    Title,
    Artist,
    /// File stem of the source.
    Filename,
    /// The raw source locator.
    Source,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Directory scanned into the shared library. The first CLI argument wins over this.
    pub dir: Option<PathBuf>,
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,

    /// Which fields build a library row label, and in what order.
    ///
    /// Example: ["artist", "title"] -> "Artist - Title"
    pub display_fields: Vec<TrackDisplayField>,
    /// Separator used to join `display_fields`.
    pub display_separator: String,

    /// Extra library entries that are not on disk, or not under `dir`.
    pub tracks: Vec<TrackDescriptor>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            dir: None,
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
            follow_links: true,
            include_hidden: true,
            recursive: true,
            max_depth: None,
            display_fields: vec![TrackDisplayField::Artist, TrackDisplayField::Title],
            display_separator: " - ".to_string(),
            tracks: Vec::new(),
        }
    }
}

/// One player deck and the tracks it starts with.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub id: PlayerId,
    pub tracks: Vec<TrackDescriptor>,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            id: PlayerId::new("1"),
            tracks: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BridgeSettings {
    /// Player that receives library picks made with Enter.
    pub target: PlayerId,
}

impl Default for BridgeSettings {
    fn default() -> Self {
        Self {
            target: PlayerId::new("1"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub enabled: bool,
    /// `tracing` filter directive; `ENCORE_LOG` overrides it.
    pub level: String,
    /// Log file. Defaults to `$XDG_STATE_HOME/encore/encore.log`.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            file: None,
        }
    }
}
