//! Audio-related small types: backend signals and the playback error.

use std::time::Duration;

use thiserror::Error;

/// Signals emitted by a media backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// The source was opened and its real duration is known.
    LoadedMetadata(Duration),
    /// The live playback position moved.
    PositionChanged,
    /// The source played to its end.
    Ended,
}

/// Why the backend could not start playback.
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("no audio output device available")]
    NoOutputDevice,
    #[error("no source loaded")]
    NoSource,
    #[error("unsupported source {0}")]
    UnsupportedSource(String),
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: rodio::decoder::DecoderError,
    },
}
