//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the player deck, the
//! shared library and the focus/selection state.

mod model;

pub use model::*;
