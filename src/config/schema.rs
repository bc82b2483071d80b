use std::path::PathBuf;

use serde::Deserialize;

use crate::player::RepeatMode;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/soundwave/config.toml` or `~/.config/soundwave/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SOUNDWAVE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub player: PlayerSettings,
    pub playback: PlaybackSettings,
    pub notifications: NotificationSettings,
    pub ui: UiSettings,
    pub library: LibrarySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Volume at startup, in percent.
    pub initial_volume: u8,
    /// Volume restored when unmuting, in percent.
    pub mute_restore_volume: u8,
    /// Percentage points added/removed by the up/down keys.
    pub volume_step: u8,
    /// "Previous" restarts the current track once this many seconds have played.
    pub restart_threshold_secs: u64,
    /// Period of the progress timer (milliseconds).
    pub tick_ms: u64,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            initial_volume: 70,
            mute_restore_volume: 70,
            volume_step: 10,
            restart_threshold_secs: 3,
            tick_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Whether shuffle starts enabled.
    pub shuffle: bool,
    /// Repeat mode at startup.
    pub repeat: RepeatSetting,
}

#[derive(Debug, Copy, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepeatSetting {
    #[default]
    #[serde(alias = "none", alias = "no-repeat", alias = "no_repeat")]
    Off,
    #[serde(alias = "repeat-all", alias = "repeat_all", alias = "loop-all")]
    All,
    #[serde(alias = "repeat-one", alias = "repeat_one", alias = "loop-one")]
    One,
}

impl From<RepeatSetting> for RepeatMode {
    fn from(setting: RepeatSetting) -> Self {
        match setting {
            RepeatSetting::Off => RepeatMode::Off,
            RepeatSetting::All => RepeatMode::All,
            RepeatSetting::One => RepeatMode::One,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    /// Slide-in time (milliseconds).
    pub enter_ms: u64,
    /// Time a notification stays up before sliding out (milliseconds).
    pub visible_ms: u64,
    /// Slide-out time (milliseconds).
    pub exit_ms: u64,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            enter_ms: 100,
            visible_ms: 3000,
            exit_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Name shown in the header and appended to the document title.
    pub app_name: String,
    /// Notification shown shortly after startup. Empty disables it.
    pub welcome_message: String,
    /// Delay before the welcome notification (milliseconds).
    pub welcome_delay_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            app_name: "SoundWave".to_string(),
            welcome_message: "Welcome to SoundWave! Press Space to play/pause".to_string(),
            welcome_delay_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Optional TOML playlist. The built-in playlist is used when unset.
    pub playlist_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter when `RUST_LOG` is not set.
    pub level: String,
    /// Log file. Without one, log records are discarded since the terminal
    /// belongs to the UI.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
