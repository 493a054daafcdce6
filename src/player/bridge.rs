use crate::error::{Error, Result};
use crate::library::{Track, TrackDescriptor};
use crate::media::MediaEndpoint;

use super::deck::Deck;
use super::id::PlayerId;

/// Forwards library picks into one target player's playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryBridge {
    target: PlayerId,
}

impl LibraryBridge {
    pub fn new(target: PlayerId) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &PlayerId {
        &self.target
    }

    /// Copy `desc` into the target playlist.
    ///
    /// Descriptors without a source are ignored. The very first track of a
    /// player that is not playing is loaded, but not played.
    pub fn on_library_item_selected<M: MediaEndpoint>(
        &self,
        deck: &mut Deck<M>,
        desc: &TrackDescriptor,
    ) -> Result<()> {
        let player = deck
            .get_mut(&self.target)
            .ok_or_else(|| Error::UnknownPlayer(self.target.clone()))?;

        if !desc.has_source() {
            tracing::debug!(player = %self.target, "library row has no source");
            return Ok(());
        }

        let len = player.append_track(Track::from_descriptor(desc));
        tracing::debug!(player = %self.target, source = %desc.source, len, "queued from library");

        if len == 1 && !player.is_playing() {
            player.load_track(0);
        }
        player.refresh_active_row();
        Ok(())
    }
}
