use super::*;
use crate::config::{LibrarySettings, TrackDisplayField};
use crate::error::Error;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn factory_applies_defaults_for_missing_fields() {
    let track = Track::from_descriptor(&TrackDescriptor::new("a.mp3"));
    assert_eq!(track.source(), "a.mp3");
    assert_eq!(track.title(), UNKNOWN_TITLE);
    assert_eq!(track.artist(), UNKNOWN_ARTIST);
    assert_eq!(track.image(), PLACEHOLDER_IMAGE);
}

#[test]
fn factory_treats_blank_fields_as_missing() {
    let desc = TrackDescriptor::new("a.mp3")
        .with_title("   ")
        .with_artist("")
        .with_image(" ");
    let track = Track::from_descriptor(&desc);
    assert_eq!(track.title(), UNKNOWN_TITLE);
    assert_eq!(track.artist(), UNKNOWN_ARTIST);
    assert_eq!(track.image(), PLACEHOLDER_IMAGE);
}

#[test]
fn factory_keeps_provided_fields() {
    let desc = TrackDescriptor::new("x.mp3")
        .with_title("X")
        .with_artist("Y")
        .with_image("cover.png");
    let track = Track::from_descriptor(&desc);
    assert_eq!(track.title(), "X");
    assert_eq!(track.artist(), "Y");
    assert_eq!(track.image(), "cover.png");
}

#[test]
fn title_from_file_name_drops_only_the_last_extension() {
    assert_eq!(title_from_file_name("song.mp3"), "song");
    assert_eq!(title_from_file_name("a.b.c.wav"), "a.b");
    assert_eq!(title_from_file_name("noext"), "noext");
}

#[test]
fn local_file_tracks_use_local_labels() {
    let file = LocalFile::from_path(Path::new("/music/live.set.flac"));
    assert_eq!(file.name, "live.set.flac");

    let track = file.to_track();
    assert_eq!(track.source(), "/music/live.set.flac");
    assert_eq!(track.title(), "live.set");
    assert_eq!(track.artist(), LOCAL_ARTIST);
    assert_eq!(track.image(), LOCAL_IMAGE);
}

#[test]
fn descriptor_without_source_is_not_playable() {
    assert!(!TrackDescriptor::default().has_source());
    assert!(!TrackDescriptor::new("  ").has_source());
    assert!(TrackDescriptor::new("a.mp3").has_source());
}

#[test]
fn display_from_fields_can_format_artist_title() {
    let fields = [TrackDisplayField::Artist, TrackDisplayField::Title];
    let desc = TrackDescriptor::new("/tmp/Song.mp3")
        .with_title("Song")
        .with_artist("  Artist  ");
    assert_eq!(display_from_fields(&desc, &fields, " - "), "Artist - Song");

    let untitled = TrackDescriptor::new("/tmp/Song.mp3").with_title("Song");
    assert_eq!(display_from_fields(&untitled, &fields, " - "), "Song");
}

#[test]
fn display_from_fields_falls_back_to_file_stem() {
    let desc = TrackDescriptor::new("/tmp/Bare.ogg");
    assert_eq!(
        display_from_fields(&desc, &[TrackDisplayField::Title], " - "),
        "Bare"
    );
    assert_eq!(
        display_from_fields(&desc, &[TrackDisplayField::Source], " - "),
        "/tmp/Bare.ogg"
    );
}

#[test]
fn collect_local_files_takes_a_single_file_as_is() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, b"whatever").unwrap();

    let files = collect_local_files(&path, &LibrarySettings::default()).unwrap();
    assert_eq!(files, vec![LocalFile::from_path(&path)]);
}

#[test]
fn collect_local_files_expands_directories_in_path_order() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.mp3"), b"x").unwrap();
    fs::write(dir.path().join("a.wav"), b"x").unwrap();
    fs::write(dir.path().join("cover.jpg"), b"x").unwrap();

    let names: Vec<String> = collect_local_files(dir.path(), &LibrarySettings::default())
        .unwrap()
        .into_iter()
        .map(|f| f.name)
        .collect();
    assert_eq!(names, vec!["a.wav", "b.mp3"]);
}

#[test]
fn collect_local_files_reports_missing_paths() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("gone.mp3");
    let err = collect_local_files(&missing, &LibrarySettings::default()).unwrap_err();
    assert!(matches!(err, Error::MissingPath(p) if p == missing));
}
