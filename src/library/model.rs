use serde::Deserialize;

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150?text=No+Image";

/// Artist label given to tracks added from the local filesystem.
pub const LOCAL_ARTIST: &str = "Local File";
pub const LOCAL_IMAGE: &str = "https://via.placeholder.com/150?text=Local+Track";

/// Declarative description of a track, as written in the config file or
/// carried by a library row. Every field but `source` is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TrackDescriptor {
    pub source: String,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub image: Option<String>,
}

impl TrackDescriptor {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Rows without a source cannot be played and are not forwarded anywhere.
    pub fn has_source(&self) -> bool {
        !self.source.trim().is_empty()
    }
}

/// One playable item. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    source: String,
    title: String,
    artist: String,
    image: String,
}

impl Track {
    /// Build a track from a descriptor, filling in the default title, artist
    /// and placeholder image for missing or blank fields.
    pub fn from_descriptor(desc: &TrackDescriptor) -> Self {
        Self {
            source: desc.source.clone(),
            title: or_default(desc.title.as_deref(), UNKNOWN_TITLE),
            artist: or_default(desc.artist.as_deref(), UNKNOWN_ARTIST),
            image: or_default(desc.image.as_deref(), PLACEHOLDER_IMAGE),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn image(&self) -> &str {
        &self.image
    }
}

/// Return `value` when it has visible content, `default` otherwise.
pub fn or_default(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}
