use std::time::Duration;

use crate::config;
use crate::library::{self, Playlist};
use crate::notify::NotificationTimings;
use crate::player::PlayerOptions;

/// Translate user settings (percentages, milliseconds) into player options.
pub fn player_options(settings: &config::Settings) -> PlayerOptions {
    let player = &settings.player;
    let notifications = &settings.notifications;
    PlayerOptions {
        app_name: settings.ui.app_name.clone(),
        initial_volume: f32::from(player.initial_volume) / 100.0,
        mute_restore_volume: f32::from(player.mute_restore_volume) / 100.0,
        restart_threshold_secs: player.restart_threshold_secs as f64,
        tick: Duration::from_millis(player.tick_ms),
        shuffle: settings.playback.shuffle,
        repeat: settings.playback.repeat.into(),
        notifications: NotificationTimings {
            enter: Duration::from_millis(notifications.enter_ms),
            visible: Duration::from_millis(notifications.visible_ms),
            exit: Duration::from_millis(notifications.exit_ms),
        },
    }
}

/// The configured playlist, or the built-in one when none is set or it
/// cannot be loaded.
pub fn load_library(settings: &config::LibrarySettings) -> Playlist {
    let Some(path) = settings.playlist_path.as_ref() else {
        return library::builtin_playlist();
    };
    match library::load_playlist(path) {
        Ok(playlist) => {
            log::info!("loaded {} tracks from {}", playlist.len(), path.display());
            playlist
        }
        Err(e) => {
            log::warn!("{e}; falling back to the built-in playlist");
            library::builtin_playlist()
        }
    }
}
