use std::path::Path;

use crate::config::TrackDisplayField;

use super::model::TrackDescriptor;

/// Build the label shown for a library entry from the configured `fields`.
///
/// Blank fields are skipped. When nothing was produced the file stem of the
/// source is used, and failing that the raw source.
pub fn display_from_fields(desc: &TrackDescriptor, fields: &[TrackDisplayField], sep: &str) -> String {
    let mut parts: Vec<String> = Vec::new();

    for f in fields {
        match f {
            TrackDisplayField::Title => {
                if let Some(t) = desc.title.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
                    parts.push(t.to_string());
                }
            }
            TrackDisplayField::Artist => {
                if let Some(a) = desc.artist.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
                    parts.push(a.to_string());
                }
            }
            TrackDisplayField::Filename => {
                if let Some(stem) = file_stem(&desc.source) {
                    parts.push(stem);
                }
            }
            TrackDisplayField::Source => {
                if !desc.source.trim().is_empty() {
                    parts.push(desc.source.clone());
                }
            }
        }
    }

    if parts.is_empty() {
        file_stem(&desc.source).unwrap_or_else(|| desc.source.clone())
    } else {
        parts.join(sep)
    }
}

fn file_stem(source: &str) -> Option<String> {
    Path::new(source)
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}
