//! The player controller: playlist navigation, playback, progress and the
//! bits of UI state it owns (favorites, shuffle/repeat, volume).
//!
//! `Player` is the only writer of `PlayerState` and of the display `Screen`.
//! Its progress timer is modelled as a single optional `ProgressTimer`, so the
//! real-position poll and the simulated tick can never run at the same time.

mod controller;
mod progress;
mod state;

pub use controller::{Player, PlayerOptions};
pub use progress::BarGeometry;
pub use state::{FavoriteTarget, RepeatMode};
