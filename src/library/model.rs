use serde::Deserialize;

use super::display::format_time;
use super::load::LibraryError;

/// One playable playlist entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
    /// Cover art reference (path or URL), shown as-is.
    #[serde(default)]
    pub cover: String,
    pub duration_secs: u32,
    /// Human readable duration. Derived from `duration_secs` when left empty.
    #[serde(default)]
    pub display_duration: String,
    /// Audio reference handed to the media backend.
    pub audio: String,
}

impl Track {
    /// Total duration as floating point seconds.
    pub fn duration(&self) -> f64 {
        f64::from(self.duration_secs)
    }
}

/// A non-empty, ordered list of tracks. A track's identity is its index.
#[derive(Debug, Clone)]
pub struct Playlist {
    pub(super) tracks: Vec<Track>,
}

impl Playlist {
    /// Build a playlist, rejecting an empty list and zero-length tracks.
    pub fn new(mut tracks: Vec<Track>) -> Result<Self, LibraryError> {
        if tracks.is_empty() {
            return Err(LibraryError::Empty);
        }
        for track in &mut tracks {
            if track.duration_secs == 0 {
                return Err(LibraryError::ZeroDuration {
                    title: track.title.clone(),
                });
            }
            if track.display_duration.trim().is_empty() {
                track.display_duration = format_time(track.duration());
            }
        }
        Ok(Self { tracks })
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Return the track at `index`. Callers keep `index < len()`.
    pub fn track(&self, index: usize) -> &Track {
        &self.tracks[index]
    }
}
