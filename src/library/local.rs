use std::path::{Path, PathBuf};

use crate::config::LibrarySettings;
use crate::error::{Error, Result};

use super::model::{LOCAL_ARTIST, LOCAL_IMAGE, Track, TrackDescriptor};
use super::scan::audio_files;

/// A file picked by the user for adding to a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    pub name: String,
    pub path: PathBuf,
}

impl LocalFile {
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name,
            path: path.to_path_buf(),
        }
    }

    /// Playable reference for this file. Valid for as long as the file stays put.
    pub fn source_ref(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    pub fn descriptor(&self) -> TrackDescriptor {
        TrackDescriptor::new(self.source_ref())
            .with_title(title_from_file_name(&self.name))
            .with_artist(LOCAL_ARTIST)
            .with_image(LOCAL_IMAGE)
    }

    pub fn to_track(&self) -> Track {
        Track::from_descriptor(&self.descriptor())
    }
}

/// Drop the last `.`-separated segment of a file name.
///
/// `"song.mp3"` becomes `"song"`, `"a.b.c.wav"` becomes `"a.b"`, and a name
/// without any dot is returned unchanged.
pub fn title_from_file_name(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, _ext)) => stem.to_string(),
        None => name.to_string(),
    }
}

/// Expand a user-supplied path into the files to add.
///
/// A file is taken as-is whatever its extension; a directory contributes its
/// audio files according to the library scan rules, ordered by path.
pub fn collect_local_files(path: &Path, settings: &LibrarySettings) -> Result<Vec<LocalFile>> {
    if !path.exists() {
        return Err(Error::MissingPath(path.to_path_buf()));
    }

    if path.is_file() {
        return Ok(vec![LocalFile::from_path(path)]);
    }

    let mut paths = audio_files(path, settings);
    paths.sort();
    Ok(paths.iter().map(|p| LocalFile::from_path(p)).collect())
}
