use std::collections::VecDeque;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use super::backend::MediaBackend;
use super::sink::{create_sink_at, open_source};
use super::types::{MediaEvent, PlaybackError};

/// `MediaBackend` playing local files through the default output device.
pub struct RodioBackend {
    stream: Option<OutputStream>,
    source: String,
    sink: Option<Sink>,
    /// Position the current sink started from; `get_pos` counts from here.
    offset: Duration,
    volume: f32,
    playing: bool,
    events: VecDeque<MediaEvent>,
    last_reported_secs: Option<u64>,
}

impl RodioBackend {
    /// Open the default output device. Without one, every `play` fails and
    /// the player simulates progress instead.
    pub fn open_default() -> Self {
        let stream = match OutputStreamBuilder::open_default_stream() {
            Ok(mut stream) => {
                // rodio logs to stderr when OutputStream is dropped, which is noisy for a TUI app.
                stream.log_on_drop(false);
                Some(stream)
            }
            Err(err) => {
                log::warn!("no audio output device: {err}");
                None
            }
        };
        Self::with_stream(stream)
    }

    /// A backend with no output device attached.
    #[cfg(test)]
    pub(crate) fn without_output() -> Self {
        Self::with_stream(None)
    }

    fn with_stream(stream: Option<OutputStream>) -> Self {
        Self {
            stream,
            source: String::new(),
            sink: None,
            offset: Duration::ZERO,
            volume: 1.0,
            playing: false,
            events: VecDeque::new(),
            last_reported_secs: None,
        }
    }

    fn drop_sink(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }

    /// Rebuild the sink at `self.offset`, keeping the play/pause state.
    fn rebuild_sink(&mut self) {
        self.drop_sink();
        let Some(stream) = self.stream.as_ref() else {
            return;
        };
        match open_source(&self.source) {
            Ok((decoder, _)) => {
                let sink = create_sink_at(stream, decoder, self.offset, self.volume);
                if self.playing {
                    sink.play();
                }
                self.sink = Some(sink);
            }
            Err(err) => log::debug!("seek could not reopen source: {err}"),
        }
    }
}

impl MediaBackend for RodioBackend {
    fn set_source(&mut self, source: &str) {
        self.drop_sink();
        self.source = source.to_string();
        self.offset = Duration::ZERO;
        self.playing = false;
        self.events.clear();
        self.last_reported_secs = None;
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        if let Some(sink) = self.sink.as_ref() {
            sink.play();
            self.playing = true;
            return Ok(());
        }

        let Some(stream) = self.stream.as_ref() else {
            return Err(PlaybackError::NoOutputDevice);
        };
        let (decoder, total) = open_source(&self.source)?;
        if let Some(total) = total {
            self.events.push_back(MediaEvent::LoadedMetadata(total));
        }

        let sink = create_sink_at(stream, decoder, self.offset, self.volume);
        sink.play();
        self.sink = Some(sink);
        self.playing = true;
        log::debug!("playing {}", self.source);
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(sink) = self.sink.as_ref() {
            sink.pause();
        }
        self.playing = false;
    }

    fn set_position(&mut self, seconds: f64) {
        let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
        self.offset = Duration::from_secs_f64(seconds);
        self.last_reported_secs = None;
        if self.sink.is_some() {
            self.rebuild_sink();
        }
    }

    fn position(&self) -> f64 {
        let played = self.sink.as_ref().map_or(Duration::ZERO, |s| s.get_pos());
        (self.offset + played).as_secs_f64()
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        if let Some(sink) = self.sink.as_ref() {
            sink.set_volume(self.volume);
        }
    }

    fn poll_event(&mut self) -> Option<MediaEvent> {
        if let Some(ev) = self.events.pop_front() {
            return Some(ev);
        }
        if !self.playing {
            return None;
        }
        let finished = self.sink.as_ref().map(Sink::empty)?;
        if finished {
            self.playing = false;
            return Some(MediaEvent::Ended);
        }

        let secs = self.position() as u64;
        if self.last_reported_secs != Some(secs) {
            self.last_reported_secs = Some(secs);
            return Some(MediaEvent::PositionChanged);
        }
        None
    }
}
