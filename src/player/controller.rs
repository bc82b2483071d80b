use std::time::{Duration, Instant};

use crate::audio::{MediaBackend, MediaEvent};
use crate::display::Screen;
use crate::library::{Playlist, Track, document_title, format_time};
use crate::notify::{NotificationTimings, Notifier};

use super::progress::{BarGeometry, ProgressSource, ProgressTimer};
use super::state::{FavoriteTarget, PlayerState, RepeatMode};

/// Knobs the player is built with, usually taken from `config::Settings`.
#[derive(Debug, Clone)]
pub struct PlayerOptions {
    pub app_name: String,
    /// Starting volume in `[0, 1]`.
    pub initial_volume: f32,
    /// Volume restored by unmuting, in `[0, 1]`.
    pub mute_restore_volume: f32,
    /// Past this many seconds, "previous" restarts the current track instead.
    pub restart_threshold_secs: f64,
    /// Period of the progress timer.
    pub tick: Duration,
    pub shuffle: bool,
    pub repeat: RepeatMode,
    pub notifications: NotificationTimings,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            app_name: "SoundWave".to_string(),
            initial_volume: 0.7,
            mute_restore_volume: 0.7,
            restart_threshold_secs: 3.0,
            tick: Duration::from_secs(1),
            shuffle: false,
            repeat: RepeatMode::Off,
            notifications: NotificationTimings::default(),
        }
    }
}

fn random_index(len: usize) -> usize {
    rand::random_range(0..len)
}

/// The player controller.
pub struct Player<B: MediaBackend> {
    playlist: Playlist,
    state: PlayerState,
    backend: B,
    screen: Screen,
    notifier: Notifier,
    progress: Option<ProgressTimer>,
    options: PlayerOptions,
    pick_shuffled: fn(usize) -> usize,
}

impl<B: MediaBackend> Player<B> {
    /// Create the player and load the first track, paused.
    pub fn new(playlist: Playlist, backend: B, options: PlayerOptions) -> Self {
        let screen = Screen::new(&playlist);
        let mut state = PlayerState::new(options.initial_volume);
        state.is_shuffled = options.shuffle;
        state.repeat_mode = options.repeat;

        let mut player = Self {
            playlist,
            state,
            backend,
            screen,
            notifier: Notifier::new(options.notifications),
            progress: None,
            options,
            pick_shuffled: random_index,
        };

        player.screen.shuffle_active = player.state.is_shuffled;
        player.screen.repeat = player.state.repeat_mode;
        player.load_track(0);
        player.apply_volume(player.state.volume);
        player
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    #[cfg(test)]
    pub(crate) fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }

    pub fn current_track(&self) -> &Track {
        self.playlist.track(self.state.current_index)
    }

    /// Source of the active progress timer, `None` when no timer runs.
    pub fn progress_source(&self) -> Option<ProgressSource> {
        self.progress.as_ref().map(ProgressTimer::source)
    }

    pub fn volume_percent(&self) -> u8 {
        (self.state.volume * 100.0).round() as u8
    }

    #[cfg(test)]
    pub(crate) fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    #[cfg(test)]
    pub(crate) fn set_shuffle_picker(&mut self, pick: fn(usize) -> usize) {
        self.pick_shuffled = pick;
    }

    /// Load track `index` into the backend and the display, position 0.
    ///
    /// Cancels any running progress timer; callers restart playback.
    pub fn load_track(&mut self, index: usize) {
        if index >= self.playlist.len() {
            log::debug!("ignoring load of track {index}, out of range");
            return;
        }
        self.progress = None;
        self.state.current_index = index;

        let track = self.playlist.track(index);
        self.backend.set_source(&track.audio);
        let title = document_title(track, &self.options.app_name);
        self.screen.show_track(track, title);
        self.screen.mark_current(index);
        self.screen.favorite_current = self.state.favorites.contains(&index);

        self.state.position_secs = 0.0;
        self.update_progress();
        log::debug!("loaded track {index}: {}", self.screen.document_title);
    }

    pub fn toggle_play(&mut self) {
        if self.state.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Start playback. If the backend refuses, progress is simulated so the
    /// player behaves the same either way.
    pub fn play(&mut self) {
        self.progress = None;
        let source = match self.backend.play() {
            Ok(()) => ProgressSource::Media,
            Err(err) => {
                log::warn!("playback failed, simulating progress: {err}");
                ProgressSource::Simulated
            }
        };

        self.state.is_playing = true;
        self.screen.set_playing(true);
        self.progress = Some(ProgressTimer::start(
            source,
            self.options.tick,
            Instant::now(),
        ));
    }

    pub fn pause(&mut self) {
        self.backend.pause();
        self.state.is_playing = false;
        self.screen.set_playing(false);
        self.progress = None;
    }

    /// Stop everything before the player goes away.
    pub fn shutdown(&mut self) {
        self.pause();
    }

    /// React to the current track finishing.
    pub fn handle_track_end(&mut self) {
        let last = self.playlist.len() - 1;
        match self.state.repeat_mode {
            RepeatMode::One => {
                self.seek_to(0.0);
                self.play();
            }
            RepeatMode::All => self.next(),
            RepeatMode::Off if self.state.current_index < last => self.next(),
            RepeatMode::Off => {
                self.pause();
                self.seek_to(0.0);
            }
        }
    }

    pub fn next(&mut self) {
        let len = self.playlist.len();
        let index = if self.state.is_shuffled {
            (self.pick_shuffled)(len) % len
        } else {
            (self.state.current_index + 1) % len
        };
        self.switch_to(index);
    }

    pub fn previous(&mut self) {
        if self.state.position_secs > self.options.restart_threshold_secs {
            self.seek_to(0.0);
            return;
        }
        let len = self.playlist.len();
        let index = (self.state.current_index + len - 1) % len;
        self.switch_to(index);
    }

    /// Load `index` and play it regardless of the previous state.
    pub fn play_from_list(&mut self, index: usize) {
        if index >= self.playlist.len() {
            return;
        }
        self.load_track(index);
        self.play();
    }

    fn switch_to(&mut self, index: usize) {
        let was_playing = self.state.is_playing;
        self.load_track(index);
        if was_playing {
            self.play();
        }
    }

    pub fn toggle_shuffle(&mut self) {
        self.state.is_shuffled = !self.state.is_shuffled;
        self.screen.shuffle_active = self.state.is_shuffled;
        if self.state.is_shuffled {
            self.notify("Shuffle enabled");
        } else {
            self.notify("Shuffle disabled");
        }
    }

    pub fn toggle_repeat(&mut self) {
        self.state.repeat_mode = self.state.repeat_mode.next();
        self.screen.repeat = self.state.repeat_mode;
        self.notify(self.state.repeat_mode.notification());
    }

    /// Repaint the progress bar and elapsed time from `position_secs`.
    pub fn update_progress(&mut self) {
        let position = self.state.position_secs;
        let percent = position / self.current_track().duration() * 100.0;
        self.screen.set_progress(percent, format_time(position));
    }

    /// Seek to the point of `bar` under `pointer_x`.
    pub fn set_progress(&mut self, pointer_x: f64, bar: BarGeometry) {
        let Some(fraction) = bar.fraction_at(pointer_x) else {
            return;
        };
        let seconds = fraction * self.current_track().duration();
        self.seek_to(seconds);
    }

    /// Move both the internal and the backend position, clamped to the track.
    pub fn seek_to(&mut self, seconds: f64) {
        self.set_position(seconds);
        self.backend.set_position(self.state.position_secs);
        self.update_progress();
    }

    fn set_position(&mut self, seconds: f64) {
        let duration = self.current_track().duration();
        self.state.position_secs = if seconds.is_finite() {
            seconds.clamp(0.0, duration)
        } else {
            0.0
        };
    }

    /// Set the volume from a `0..=100` percentage.
    pub fn set_volume(&mut self, percent: f32) {
        let percent = if percent.is_finite() {
            percent.clamp(0.0, 100.0)
        } else {
            0.0
        };
        self.apply_volume(percent / 100.0);
    }

    /// Nudge the volume by `delta` percentage points.
    pub fn step_volume(&mut self, delta: i32) {
        let percent = (i32::from(self.volume_percent()) + delta).clamp(0, 100);
        self.set_volume(percent as f32);
    }

    /// Mute, or unmute to the fixed restore volume. The pre-mute volume is
    /// not remembered.
    pub fn toggle_mute(&mut self) {
        if self.state.volume > 0.0 {
            self.apply_volume(0.0);
        } else {
            self.apply_volume(self.options.mute_restore_volume);
        }
    }

    fn apply_volume(&mut self, volume: f32) {
        let volume = volume.clamp(0.0, 1.0);
        self.state.volume = volume;
        self.backend.set_volume(volume);
        self.screen.set_volume(volume);
    }

    pub fn toggle_favorite(&mut self, target: FavoriteTarget) {
        let index = match target {
            FavoriteTarget::Current => self.state.current_index,
            FavoriteTarget::Track(i) => i,
        };
        if index >= self.playlist.len() {
            return;
        }

        let added = self.state.favorites.insert(index);
        if !added {
            self.state.favorites.remove(&index);
        }
        self.screen.set_favorite(index, added);
        if index == self.state.current_index {
            self.screen.favorite_current = added;
        }

        let action = if added { "added to" } else { "removed from" };
        let title = self.playlist.track(index).title.clone();
        self.notify(format!("{title} {action} favorites"));
    }

    /// Show a transient notification, replacing any current one.
    pub fn notify(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::debug!("notify: {message}");
        self.notifier.show(message, Instant::now());
    }

    /// Hide list entries whose title and artist both miss `query`
    /// (case-insensitive substring).
    pub fn filter_list(&mut self, query: &str) {
        let query = query.to_lowercase();
        for (i, track) in self.playlist.tracks().iter().enumerate() {
            let matches = track.title.to_lowercase().contains(&query)
                || track.artist.to_lowercase().contains(&query);
            self.screen.set_entry_visible(i, matches);
        }
    }

    /// Drive timers. Called from the event loop on every iteration.
    pub fn tick(&mut self, now: Instant) {
        self.notifier.prune(now);
        let due = self
            .progress
            .as_mut()
            .is_some_and(|timer| timer.fire_if_due(now));
        if due {
            self.progress_tick();
        }
    }

    /// One step of the active progress timer.
    pub fn progress_tick(&mut self) {
        let Some(source) = self.progress_source() else {
            return;
        };
        match source {
            ProgressSource::Media => {
                let position = self.backend.position();
                if position > 0.0 {
                    self.set_position(position);
                }
                self.update_progress();
            }
            ProgressSource::Simulated => {
                self.set_position(self.state.position_secs + self.options.tick.as_secs_f64());
                self.update_progress();
                if self.state.position_secs >= self.current_track().duration() {
                    self.handle_track_end();
                }
            }
        }
    }

    pub fn on_media_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::LoadedMetadata(duration) => {
                self.screen.total_time = format_time(duration.as_secs_f64());
            }
            MediaEvent::PositionChanged => {
                let position = self.backend.position();
                self.set_position(position);
                self.update_progress();
            }
            MediaEvent::Ended => self.handle_track_end(),
        }
    }

    /// Drain and handle every pending backend signal.
    pub fn pump_media_events(&mut self) {
        while let Some(event) = self.backend.poll_event() {
            self.on_media_event(event);
        }
    }
}
