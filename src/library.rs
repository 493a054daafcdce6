//! Track model and the shared library.
//!
//! `Track` values are built through a single factory that applies the
//! title/artist/image defaults. The library list itself comes from a
//! directory scan plus declarative entries from the config file.

mod display;
mod local;
mod model;
mod scan;

pub use display::display_from_fields;
pub use local::{LocalFile, collect_local_files, title_from_file_name};
pub use model::*;
pub use scan::{LibraryEntry, build_library, scan};

#[cfg(test)]
mod tests;
