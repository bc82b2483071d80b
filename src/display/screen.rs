use crate::library::{Playlist, Track};
use crate::player::RepeatMode;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlayIcon {
    Play,
    Pause,
}

/// Which volume glyph to show.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VolumeTier {
    Muted,
    Low,
    High,
}

impl VolumeTier {
    /// Muted at exactly zero, low below one half, high otherwise.
    pub fn from_volume(volume: f32) -> Self {
        if volume <= 0.0 {
            Self::Muted
        } else if volume < 0.5 {
            Self::Low
        } else {
            Self::High
        }
    }
}

/// One row of the song list.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryView {
    pub title: String,
    pub artist: String,
    pub duration: String,
    pub current: bool,
    pub visible: bool,
    pub favorite: bool,
}

/// Everything the UI renders. Only the player writes here.
#[derive(Debug, Clone)]
pub struct Screen {
    pub title: String,
    pub artist: String,
    pub cover: String,
    pub total_time: String,
    pub document_title: String,
    pub elapsed_time: String,
    /// Fill width and handle position of the progress bar, `0..=100`.
    pub progress_percent: f64,
    pub play_icon: PlayIcon,
    pub playing: bool,
    pub shuffle_active: bool,
    pub repeat: RepeatMode,
    pub volume_percent: u8,
    pub volume_tier: VolumeTier,
    pub favorite_current: bool,
    pub entries: Vec<EntryView>,
}

impl Screen {
    pub fn new(playlist: &Playlist) -> Self {
        let entries = playlist
            .tracks()
            .iter()
            .map(|t| EntryView {
                title: t.title.clone(),
                artist: t.artist.clone(),
                duration: t.display_duration.clone(),
                current: false,
                visible: true,
                favorite: false,
            })
            .collect();

        Self {
            title: String::new(),
            artist: String::new(),
            cover: String::new(),
            total_time: String::new(),
            document_title: String::new(),
            elapsed_time: String::from("0:00"),
            progress_percent: 0.0,
            play_icon: PlayIcon::Play,
            playing: false,
            shuffle_active: false,
            repeat: RepeatMode::Off,
            volume_percent: 0,
            volume_tier: VolumeTier::Muted,
            favorite_current: false,
            entries,
        }
    }

    /// Fill the now-playing fields from `track`.
    pub fn show_track(&mut self, track: &Track, document_title: String) {
        self.cover = track.cover.clone();
        self.title = track.title.clone();
        self.artist = track.artist.clone();
        self.total_time = track.display_duration.clone();
        self.document_title = document_title;
    }

    /// Mark exactly one list entry as current.
    pub fn mark_current(&mut self, index: usize) {
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.current = i == index;
        }
    }

    pub fn set_progress(&mut self, percent: f64, elapsed: String) {
        self.progress_percent = percent.clamp(0.0, 100.0);
        self.elapsed_time = elapsed;
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
        self.play_icon = if playing {
            PlayIcon::Pause
        } else {
            PlayIcon::Play
        };
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume_percent = (volume.clamp(0.0, 1.0) * 100.0).round() as u8;
        self.volume_tier = VolumeTier::from_volume(volume);
    }

    pub fn set_favorite(&mut self, index: usize, favorite: bool) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.favorite = favorite;
        }
    }

    pub fn set_entry_visible(&mut self, index: usize, visible: bool) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.visible = visible;
        }
    }

    /// Indices of entries currently shown in the song list.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.visible)
            .map(|(i, _)| i)
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn current_index(&self) -> Option<usize> {
        self.entries.iter().position(|e| e.current)
    }
}
