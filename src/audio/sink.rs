//! Utilities for turning an audio reference into a ready `rodio` sink.
//!
//! Only local files are playable. Remote references fail with
//! `PlaybackError::UnsupportedSource` so the player can fall back to
//! simulated progress.

use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink, Source};

use super::types::PlaybackError;

/// True when `reference` names something other than a local file.
pub(super) fn is_remote(reference: &str) -> bool {
    reference.contains("://")
}

/// Open and decode `reference`, returning the decoder and its total duration.
pub(super) fn open_source(
    reference: &str,
) -> Result<(Decoder<BufReader<File>>, Option<Duration>), PlaybackError> {
    if reference.trim().is_empty() {
        return Err(PlaybackError::NoSource);
    }
    if is_remote(reference) {
        return Err(PlaybackError::UnsupportedSource(reference.to_string()));
    }

    let file = File::open(reference).map_err(|source| PlaybackError::Open {
        path: reference.to_string(),
        source,
    })?;
    let decoder = Decoder::new(BufReader::new(file)).map_err(|source| PlaybackError::Decode {
        path: reference.to_string(),
        source,
    })?;
    let total = decoder.total_duration();
    Ok((decoder, total))
}

/// Create a paused `Sink` playing `decoder` from `start_at` at `volume`.
pub(super) fn create_sink_at(
    stream: &OutputStream,
    decoder: Decoder<BufReader<File>>,
    start_at: Duration,
    volume: f32,
) -> Sink {
    // `skip_duration` is our seeking primitive; even Duration::ZERO is fine.
    let source = decoder.skip_duration(start_at);

    let sink = Sink::connect_new(stream.mixer());
    sink.set_volume(volume);
    sink.append(source);
    sink.pause();
    sink
}
