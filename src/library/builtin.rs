use super::model::{Playlist, Track};

const DEMO_AUDIO: &str = "https://www.soundjay.com/misc/sounds/bell-ringing-05.wav";

fn track(title: &str, artist: &str, cover: &str, display: &str, secs: u32) -> Track {
    Track {
        title: title.to_string(),
        artist: artist.to_string(),
        cover: cover.to_string(),
        duration_secs: secs,
        display_duration: display.to_string(),
        audio: DEMO_AUDIO.to_string(),
    }
}

/// The playlist shipped with the player, used when no playlist file is configured.
pub fn builtin_playlist() -> Playlist {
    let tracks = vec![
        track(
            "Abstract Vibes",
            "Electronic Dreams",
            "assets/images/abstract.jpg",
            "3:45",
            225,
        ),
        track(
            "Neon Dreams",
            "Retro Future",
            "assets/images/neon-dreams.jpg",
            "4:12",
            252,
        ),
        track(
            "Mountain High",
            "Indie Collective",
            "assets/images/mountain-high.jpg",
            "3:28",
            208,
        ),
    ];
    Playlist { tracks }
}
