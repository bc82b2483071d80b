//! Playlist model and loaders.
//!
//! A `Playlist` is the fixed, ordered list of tracks the player works on.
//! It either comes from the built-in set or from a TOML playlist file.

mod builtin;
mod display;
mod load;
mod model;

pub use builtin::builtin_playlist;
pub use display::{document_title, format_time};
pub use load::load_playlist;
pub use model::{Playlist, Track};
