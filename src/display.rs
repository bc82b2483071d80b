//! Passive display bindings written by the player and read by the UI.

mod screen;

pub use screen::{PlayIcon, Screen, VolumeTier};
