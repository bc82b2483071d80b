use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::model::{Playlist, Track};

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("failed to read playlist {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse playlist {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("playlist has no tracks")]
    Empty,
    #[error("track \"{title}\" has a zero duration")]
    ZeroDuration { title: String },
}

#[derive(Debug, Deserialize)]
struct PlaylistFile {
    #[serde(default)]
    tracks: Vec<Track>,
}

/// Load a playlist from a TOML file made of `[[tracks]]` tables.
///
/// Relative `audio` and `cover` references are resolved against the
/// directory containing the playlist file.
pub fn load_playlist(path: &Path) -> Result<Playlist, LibraryError> {
    let raw = fs::read_to_string(path).map_err(|source| LibraryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: PlaylistFile = toml::from_str(&raw).map_err(|source| LibraryError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    let tracks = file
        .tracks
        .into_iter()
        .map(|mut t| {
            t.audio = resolve_reference(base, &t.audio);
            t.cover = resolve_reference(base, &t.cover);
            t
        })
        .collect();

    Playlist::new(tracks)
}

/// Anchor a relative file reference at `base`. URLs, absolute paths and
/// empty references are returned unchanged.
pub(super) fn resolve_reference(base: &Path, reference: &str) -> String {
    let reference = reference.trim();
    if reference.is_empty() || reference.contains("://") {
        return reference.to_string();
    }
    let p = Path::new(reference);
    if p.is_absolute() {
        reference.to_string()
    } else {
        base.join(p).display().to_string()
    }
}
