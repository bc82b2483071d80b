use std::time::{Duration, Instant};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use super::event_loop::{EventLoopState, pasted_query, translate};
use super::startup::{load_library, player_options};
use crate::config::{LibrarySettings, RepeatSetting, Settings};
use crate::input::{InputEvent, Key, PointerPhase};
use crate::player::RepeatMode;

fn key(code: KeyCode, kind: KeyEventKind) -> Event {
    Event::Key(KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind,
        state: KeyEventState::NONE,
    })
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn player_options_convert_percentages_and_millis() {
    let mut settings = Settings::default();
    settings.player.initial_volume = 50;
    settings.player.tick_ms = 250;
    settings.playback.shuffle = true;
    settings.playback.repeat = RepeatSetting::One;
    settings.notifications.visible_ms = 1500;

    let options = player_options(&settings);
    assert_eq!(options.initial_volume, 0.5);
    assert_eq!(options.mute_restore_volume, 0.7);
    assert_eq!(options.restart_threshold_secs, 3.0);
    assert_eq!(options.tick, Duration::from_millis(250));
    assert!(options.shuffle);
    assert_eq!(options.repeat, RepeatMode::One);
    assert_eq!(options.notifications.visible, Duration::from_millis(1500));
    assert_eq!(options.app_name, "SoundWave");
}

#[test]
fn library_falls_back_to_builtin_when_missing() {
    assert_eq!(load_library(&LibrarySettings::default()).len(), 3);

    let dir = tempfile::tempdir().unwrap();
    let settings = LibrarySettings {
        playlist_path: Some(dir.path().join("missing.toml")),
    };
    assert_eq!(load_library(&settings).tracks()[0].title, "Abstract Vibes");
}

#[test]
fn library_loads_configured_playlist() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mix.toml");
    std::fs::write(
        &path,
        r#"
[[tracks]]
title = "Only One"
artist = "Solo"
duration_secs = 61
audio = "one.mp3"
"#,
    )
    .unwrap();

    let playlist = load_library(&LibrarySettings {
        playlist_path: Some(path),
    });
    assert_eq!(playlist.len(), 1);
    assert_eq!(playlist.tracks()[0].title, "Only One");
}

#[test]
fn translate_maps_keys_and_ignores_releases() {
    assert_eq!(
        translate(key(KeyCode::Char(' '), KeyEventKind::Press)),
        Some(InputEvent::Key(Key::Space))
    );
    assert_eq!(
        translate(key(KeyCode::Left, KeyEventKind::Press)),
        Some(InputEvent::Key(Key::ArrowLeft))
    );
    assert_eq!(
        translate(key(KeyCode::Char('m'), KeyEventKind::Press)),
        Some(InputEvent::Key(Key::Char('m')))
    );
    assert_eq!(translate(key(KeyCode::Char('m'), KeyEventKind::Release)), None);
    assert_eq!(translate(key(KeyCode::F(5), KeyEventKind::Press)), None);
}

#[test]
fn translate_maps_left_button_to_pointer_phases() {
    let Some(InputEvent::Pointer(p)) = translate(mouse(MouseEventKind::Down(MouseButton::Left), 4, 2))
    else {
        panic!("expected pointer event");
    };
    assert_eq!(p.phase, PointerPhase::Press);
    assert_eq!((p.x, p.y), (4.5, 2.5));

    let Some(InputEvent::Pointer(p)) = translate(mouse(MouseEventKind::Drag(MouseButton::Left), 9, 2))
    else {
        panic!("expected pointer event");
    };
    assert_eq!(p.phase, PointerPhase::Move);

    assert_eq!(translate(mouse(MouseEventKind::Down(MouseButton::Right), 1, 1)), None);
    assert_eq!(translate(mouse(MouseEventKind::Moved, 1, 1)), None);
}

#[test]
fn welcome_is_scheduled_unless_disabled() {
    let start = Instant::now();
    let settings = Settings::default();
    let state = EventLoopState::new(&settings, start);
    assert_eq!(state.welcome_at, Some(start + Duration::from_millis(1000)));

    let mut quiet = Settings::default();
    quiet.ui.welcome_message.clear();
    assert!(EventLoopState::new(&quiet, start).welcome_at.is_none());

    let mut no_delay = Settings::default();
    no_delay.ui.welcome_delay_ms = 0;
    assert!(EventLoopState::new(&no_delay, start).welcome_at.is_none());
}

#[test]
fn pasted_text_extends_the_search_query() {
    assert_eq!(
        pasted_query("neo", "n\nDreams"),
        InputEvent::SearchChanged("neonDreams".into())
    );
    assert_eq!(
        pasted_query("", "Indie"),
        InputEvent::SearchChanged("Indie".into())
    );
}
