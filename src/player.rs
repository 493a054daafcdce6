//! Player decks: one controller per player plus the library bridge.
//!
//! A `PlayerController` owns its playlist, its cursor and the display
//! model rendered by the UI. It drives a `MediaEndpoint` and never shares
//! mutable state with other controllers; the `LibraryBridge` only copies
//! track data into a target controller.

mod bridge;
mod controller;
mod deck;
mod id;
mod view;

pub use bridge::LibraryBridge;
pub use controller::PlayerController;
pub use deck::Deck;
pub use id::PlayerId;
pub use view::{PlayLabel, PlayerView, PlaylistRow};
