//! Player state types: `PlayerState` and `RepeatMode`.

use std::collections::BTreeSet;

/// What happens when a track ends.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum RepeatMode {
    /// Stop at the end of the playlist.
    #[default]
    Off,
    /// Wrap around to the first track.
    All,
    /// Replay the current track.
    One,
}

impl RepeatMode {
    /// Cycle `Off -> All -> One -> Off`.
    pub fn next(self) -> Self {
        match self {
            Self::Off => Self::All,
            Self::All => Self::One,
            Self::One => Self::Off,
        }
    }

    pub fn notification(self) -> &'static str {
        match self {
            Self::Off => "Repeat off",
            Self::All => "Repeat all",
            Self::One => "Repeat one",
        }
    }
}

/// Which track a favorite toggle applies to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FavoriteTarget {
    Current,
    Track(usize),
}

/// Mutable player state for the lifetime of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub current_index: usize,
    pub is_playing: bool,
    pub is_shuffled: bool,
    pub repeat_mode: RepeatMode,
    /// Always within `0..=duration` of the current track.
    pub position_secs: f64,
    /// In `[0, 1]`.
    pub volume: f32,
    pub favorites: BTreeSet<usize>,
}

impl PlayerState {
    pub fn new(volume: f32) -> Self {
        Self {
            current_index: 0,
            is_playing: false,
            is_shuffled: false,
            repeat_mode: RepeatMode::Off,
            position_secs: 0.0,
            volume: volume.clamp(0.0, 1.0),
            favorites: BTreeSet::new(),
        }
    }
}
