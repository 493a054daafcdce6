use std::path::Path;
use std::sync::mpsc::Sender;

use crate::app::App;
use crate::config;
use crate::error::{Error, Result};
use crate::library::build_library;
use crate::media::{MediaEndpoint, MediaEvent, RodioEndpoint};
use crate::player::{Deck, LibraryBridge, PlayerController};

/// Open one endpoint per configured player and seed its playlist, then
/// assemble the library and the bridge into an `App`.
///
/// Any player whose audio output cannot be opened aborts startup, as does a
/// bridge target that names no player.
pub fn build_app(
    settings: &config::Settings,
    library_dir: Option<&Path>,
    events: &Sender<MediaEvent>,
) -> Result<App<RodioEndpoint>> {
    let mut deck = Deck::new();
    for p in &settings.players {
        let endpoint = RodioEndpoint::open(
            p.id.clone(),
            events.clone(),
            settings.audio.initial_volume,
        )?;
        let controller = PlayerController::new(p.id.clone(), endpoint, &p.tracks);
        tracing::info!(player = %p.id, tracks = controller.len(), "player ready");
        deck.push(controller)?;
    }

    if deck.get(&settings.bridge.target).is_none() {
        return Err(Error::UnknownPlayer(settings.bridge.target.clone()));
    }
    let bridge = LibraryBridge::new(settings.bridge.target.clone());

    let library = build_library(library_dir, &settings.library);
    Ok(App::new(deck, library, bridge))
}

/// Stop every player, fading out over `fade_out_ms`.
pub fn shutdown(app: &App<RodioEndpoint>, fade_out_ms: u64) {
    for p in app.deck.iter() {
        tracing::debug!(player = %p.id(), volume = p.media().volume(), "stopping player");
        p.media()
            .quit_softly(std::time::Duration::from_millis(fade_out_ms));
    }
}
