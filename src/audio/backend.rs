use super::types::{MediaEvent, PlaybackError};

/// The audio rendering capability driven by the player.
///
/// Positions are in seconds. Volume is in `[0, 1]`.
pub trait MediaBackend {
    /// Point the backend at a new source. Stops whatever was playing.
    fn set_source(&mut self, source: &str);
    /// Start or resume playback of the current source.
    fn play(&mut self) -> Result<(), PlaybackError>;
    fn pause(&mut self);
    fn set_position(&mut self, seconds: f64);
    fn position(&self) -> f64;
    fn set_volume(&mut self, volume: f32);
    /// Next pending signal, if any. Called from the event loop until `None`.
    fn poll_event(&mut self) -> Option<MediaEvent>;
}
