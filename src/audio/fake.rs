//! Scriptable `MediaBackend` used by unit tests.

use std::collections::VecDeque;

use super::backend::MediaBackend;
use super::types::{MediaEvent, PlaybackError};

/// In-memory backend recording what the player asked for.
#[derive(Debug, Default)]
pub(crate) struct FakeBackend {
    pub(crate) fail_play: bool,
    pub(crate) source: String,
    pub(crate) playing: bool,
    pub(crate) position: f64,
    pub(crate) volume: f32,
    pub(crate) play_calls: usize,
    pub(crate) pause_calls: usize,
    pub(crate) events: VecDeque<MediaEvent>,
}

impl FakeBackend {
    pub(crate) fn working() -> Self {
        Self::default()
    }

    pub(crate) fn broken() -> Self {
        Self {
            fail_play: true,
            ..Self::default()
        }
    }
}

impl MediaBackend for FakeBackend {
    fn set_source(&mut self, source: &str) {
        self.source = source.to_string();
        self.playing = false;
        self.position = 0.0;
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        self.play_calls += 1;
        if self.fail_play {
            return Err(PlaybackError::UnsupportedSource(self.source.clone()));
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.pause_calls += 1;
        self.playing = false;
    }

    fn set_position(&mut self, seconds: f64) {
        self.position = seconds;
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    fn poll_event(&mut self) -> Option<MediaEvent> {
        self.events.pop_front()
    }
}
