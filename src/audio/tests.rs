use std::fs;

use tempfile::tempdir;

use super::sink::{is_remote, open_source};
use super::types::PlaybackError;
use super::*;

#[test]
fn remote_references_are_detected() {
    assert!(is_remote("https://example.invalid/a.wav"));
    assert!(is_remote("file:///tmp/a.wav"));
    assert!(!is_remote("/tmp/a.wav"));
    assert!(!is_remote("songs/a.ogg"));
}

#[test]
fn open_source_classifies_failures() {
    assert!(matches!(open_source(""), Err(PlaybackError::NoSource)));
    assert!(matches!(
        open_source("https://example.invalid/a.wav"),
        Err(PlaybackError::UnsupportedSource(_))
    ));

    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.wav");
    assert!(matches!(
        open_source(missing.to_str().unwrap()),
        Err(PlaybackError::Open { .. })
    ));

    let garbage = dir.path().join("garbage.mp3");
    fs::write(&garbage, b"definitely not audio").unwrap();
    assert!(matches!(
        open_source(garbage.to_str().unwrap()),
        Err(PlaybackError::Decode { .. })
    ));
}

#[test]
fn backend_without_output_fails_to_play_but_tracks_position() {
    let mut backend = RodioBackend::without_output();
    backend.set_source("/tmp/whatever.wav");
    assert!(matches!(backend.play(), Err(PlaybackError::NoOutputDevice)));

    backend.set_position(12.5);
    assert!((backend.position() - 12.5).abs() < 1e-9);
    assert_eq!(backend.poll_event(), None);

    backend.set_source("/tmp/other.wav");
    assert_eq!(backend.position(), 0.0);
}

#[test]
fn negative_positions_are_clamped_to_zero() {
    let mut backend = RodioBackend::without_output();
    backend.set_position(-3.0);
    assert_eq!(backend.position(), 0.0);
    backend.set_position(f64::NAN);
    assert_eq!(backend.position(), 0.0);
}
