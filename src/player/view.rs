//! Display model for one player.

use std::fmt;

use crate::library::{PLACEHOLDER_IMAGE, Track, UNKNOWN_ARTIST, UNKNOWN_TITLE, or_default};

/// Label of the play/pause control.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayLabel {
    Play,
    Pause,
}

impl fmt::Display for PlayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Play => f.write_str("Play"),
            Self::Pause => f.write_str("Pause"),
        }
    }
}

/// One playlist row. `index` is the playlist position the row stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistRow {
    pub index: usize,
    pub label: String,
    active: bool,
}

impl PlaylistRow {
    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerView {
    pub title: String,
    pub artist: String,
    pub image: String,
    pub play_label: PlayLabel,
    rows: Vec<PlaylistRow>,
}

impl Default for PlayerView {
    fn default() -> Self {
        Self {
            title: String::new(),
            artist: String::new(),
            image: PLACEHOLDER_IMAGE.to_string(),
            play_label: PlayLabel::Play,
            rows: Vec::new(),
        }
    }
}

impl PlayerView {
    pub fn rows(&self) -> &[PlaylistRow] {
        &self.rows
    }

    /// Position of the active row, if any.
    pub fn active_row(&self) -> Option<usize> {
        self.rows.iter().position(|r| r.active)
    }

    pub(super) fn push_row(&mut self, index: usize, track: &Track) {
        self.rows.push(PlaylistRow {
            index,
            label: track.title().to_string(),
            active: false,
        });
    }

    pub(super) fn show_track(&mut self, track: &Track) {
        self.title = or_default(Some(track.title()), UNKNOWN_TITLE);
        self.artist = or_default(Some(track.artist()), UNKNOWN_ARTIST);
        self.image = or_default(Some(track.image()), PLACEHOLDER_IMAGE);
    }

    /// Mark the row standing for `index` active and every other row inactive.
    pub(super) fn mark_active(&mut self, index: Option<usize>) {
        for row in &mut self.rows {
            row.active = Some(row.index) == index;
        }
    }
}
