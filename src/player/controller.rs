use crate::library::{LocalFile, Track, TrackDescriptor};
use crate::media::MediaEndpoint;

use super::id::PlayerId;
use super::view::{PlayLabel, PlayerView};

/// One player: playlist, playback cursor and display model around a
/// `MediaEndpoint`.
///
/// States are Empty (no track loaded), Loaded-Paused and Loaded-Playing.
/// Loading a track never changes `is_playing`; only `play` and `pause` do.
#[derive(Debug)]
pub struct PlayerController<M> {
    id: PlayerId,
    media: M,
    playlist: Vec<Track>,
    /// `None` until the first successful load, then always in bounds.
    cursor: Option<usize>,
    is_playing: bool,
    view: PlayerView,
}

impl<M: MediaEndpoint> PlayerController<M> {
    /// Build a controller seeded with `initial` tracks. The first track, if
    /// any, is loaded but not played.
    pub fn new(id: PlayerId, media: M, initial: &[TrackDescriptor]) -> Self {
        let mut controller = Self {
            id,
            media,
            playlist: Vec::with_capacity(initial.len()),
            cursor: None,
            is_playing: false,
            view: PlayerView::default(),
        };

        for desc in initial {
            controller.append_track(Track::from_descriptor(desc));
        }
        if !controller.playlist.is_empty() {
            controller.load_track(0);
        }
        controller
    }

    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    pub fn playlist(&self) -> &[Track] {
        &self.playlist
    }

    pub fn len(&self) -> usize {
        self.playlist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlist.is_empty()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.cursor.and_then(|i| self.playlist.get(i))
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn view(&self) -> &PlayerView {
        &self.view
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn volume(&self) -> f32 {
        self.media.volume()
    }

    /// Load the track at `index` without starting playback.
    ///
    /// Out-of-range indices are ignored.
    pub fn load_track(&mut self, index: usize) {
        let Some(track) = self.playlist.get(index) else {
            return;
        };

        tracing::debug!(player = %self.id, index, source = track.source(), "load track");
        self.media.load(track.source());
        self.view.show_track(track);
        self.cursor = Some(index);
        self.refresh_active_row();
    }

    pub fn play(&mut self) {
        if self.playlist.is_empty() {
            tracing::warn!(player = %self.id, "no songs in the playlist to play");
            return;
        }
        self.media.play();
        self.is_playing = true;
        self.view.play_label = PlayLabel::Pause;
    }

    pub fn pause(&mut self) {
        self.media.pause();
        self.is_playing = false;
        self.view.play_label = PlayLabel::Play;
    }

    pub fn toggle_play_pause(&mut self) {
        if self.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Step back one track, wrapping from the first to the last, and play it.
    pub fn play_previous(&mut self) {
        let len = self.playlist.len();
        if len == 0 {
            return;
        }
        let cur = self.cursor.unwrap_or(0);
        self.load_track((cur + len - 1) % len);
        self.play();
    }

    /// Step forward one track, wrapping from the last to the first, and play it.
    pub fn play_next(&mut self) {
        let len = self.playlist.len();
        if len == 0 {
            return;
        }
        let cur = self.cursor.unwrap_or(0);
        self.load_track((cur + 1) % len);
        self.play();
    }

    /// The endpoint reported that playback started at `generation` played
    /// to its end. Reports about replaced playback are dropped.
    pub fn on_ended(&mut self, generation: u64) {
        if generation != self.media.generation() {
            tracing::debug!(
                player = %self.id,
                generation,
                current = self.media.generation(),
                "stale end of track"
            );
            return;
        }
        self.play_next();
    }

    /// Forward `level` to the endpoint as-is. Range checks belong to the caller.
    pub fn set_volume(&mut self, level: f32) {
        self.media.set_volume(level);
    }

    /// Append local files to the playlist.
    ///
    /// When nothing has ever been loaded the first track is loaded, without
    /// starting playback.
    pub fn add_local_files(&mut self, files: &[LocalFile]) {
        for file in files {
            self.append_track(file.to_track());
        }
        tracing::info!(player = %self.id, added = files.len(), total = self.len(), "added local files");

        if !self.playlist.is_empty() && self.cursor.is_none() {
            self.load_track(0);
        }
        self.refresh_active_row();
    }

    /// Load and play the track a playlist row stands for.
    pub fn select_row(&mut self, row: usize) {
        let Some(index) = self.view.rows().get(row).map(|r| r.index) else {
            return;
        };
        if index >= self.playlist.len() {
            return;
        }
        self.load_track(index);
        self.play();
    }

    /// Append `track` and its row. Returns the new playlist length.
    pub fn append_track(&mut self, track: Track) -> usize {
        let index = self.playlist.len();
        self.view.push_row(index, &track);
        self.playlist.push(track);
        self.playlist.len()
    }

    /// Re-mark the row at the cursor as the only active one.
    pub fn refresh_active_row(&mut self) {
        self.view.mark_active(self.cursor);
    }
}
