use std::path::{Path, PathBuf};

use lofty::prelude::{Accessor, TaggedFileExt};
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::display::display_from_fields;
use super::model::TrackDescriptor;

/// A row of the shared library: the track data plus its rendered label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryEntry {
    pub descriptor: TrackDescriptor,
    pub label: String,
}

/// Lowercased extensions without a leading dot.
fn wanted_extensions(settings: &LibrarySettings) -> Vec<String> {
    settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

fn has_extension(path: &Path, wanted: &[String]) -> bool {
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => wanted.iter().any(|w| w.eq_ignore_ascii_case(ext)),
        None => false,
    }
}

fn is_dotfile(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

/// Walk `dir` and return every audio file the settings admit, in walk order.
pub(super) fn audio_files(dir: &Path, settings: &LibrarySettings) -> Vec<PathBuf> {
    let wanted = wanted_extensions(settings);
    let skip_hidden = !settings.include_hidden;

    // The root sits at depth 0, so a flat scan stops at depth 1.
    let max_depth = match (settings.recursive, settings.max_depth) {
        (false, _) => 1,
        (true, Some(d)) => d,
        (true, None) => usize::MAX,
    };

    WalkDir::new(dir)
        .follow_links(settings.follow_links)
        .max_depth(max_depth)
        .into_iter()
        .filter_entry(|e| !(skip_hidden && e.depth() > 0 && is_dotfile(e.path())))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!(error = %e, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() || entry.path().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| has_extension(path, &wanted))
        .collect()
}

/// Read title/artist tags, falling back to the file stem for the title.
fn describe(path: &Path) -> TrackDescriptor {
    let mut desc = TrackDescriptor::new(path.to_string_lossy().into_owned());
    desc.title = path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string);

    match lofty::read_from_path(path) {
        Ok(tagged) => {
            if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                if let Some(v) = tag.title().filter(|v| !v.trim().is_empty()) {
                    desc.title = Some(v.trim().to_string());
                }
                if let Some(v) = tag.artist().filter(|v| !v.trim().is_empty()) {
                    desc.artist = Some(v.trim().to_string());
                }
            }
        }
        Err(e) => tracing::debug!(path = %path.display(), error = %e, "no readable tags"),
    }

    desc
}

/// Scan `dir` for audio files and describe each one.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<TrackDescriptor> {
    audio_files(dir, settings)
        .iter()
        .map(|p| describe(p))
        .collect()
}

/// Assemble the library list from the declarative entries in `settings`
/// and, when given, a scan of `dir`. Entries are sorted by label.
pub fn build_library(dir: Option<&Path>, settings: &LibrarySettings) -> Vec<LibraryEntry> {
    let mut descriptors = settings.tracks.clone();
    if let Some(dir) = dir {
        let found = scan(dir, settings);
        tracing::info!(dir = %dir.display(), count = found.len(), "scanned library");
        descriptors.extend(found);
    }

    let mut entries: Vec<LibraryEntry> = descriptors
        .into_iter()
        .map(|descriptor| {
            let label = display_from_fields(
                &descriptor,
                &settings.display_fields,
                &settings.display_separator,
            );
            LibraryEntry { descriptor, label }
        })
        .collect();

    entries.sort_by(|a, b| a.label.to_lowercase().cmp(&b.label.to_lowercase()));
    entries
}
