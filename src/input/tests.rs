use super::*;
use crate::audio::fake::FakeBackend;
use crate::library::builtin_playlist;
use crate::player::{FavoriteTarget, Player, PlayerOptions, RepeatMode};

fn player() -> Player<FakeBackend> {
    Player::new(
        builtin_playlist(),
        FakeBackend::working(),
        PlayerOptions::default(),
    )
}

fn region(left: f64, top: f64, width: f64, height: f64) -> Region {
    Region {
        left,
        top,
        width,
        height,
    }
}

/// Progress bar on row 5, columns 10..110; volume bar on row 7, columns 0..50;
/// play button on row 7; two list rows with a heart cell at their right end.
fn hits() -> HitMap {
    let mut hits = HitMap::default();
    hits.push(region(10.0, 5.0, 100.0, 1.0), Target::ProgressBar);
    hits.push(region(0.0, 7.0, 50.0, 1.0), Target::VolumeBar);
    hits.push(region(60.0, 7.0, 4.0, 1.0), Target::Control(Control::PlayPause));
    hits.push(region(0.0, 9.0, 40.0, 1.0), Target::Entry(1));
    hits.push(
        region(36.0, 9.0, 4.0, 1.0),
        Target::Favorite(FavoriteTarget::Track(1)),
    );
    hits.push(region(0.0, 11.0, 40.0, 1.0), Target::SearchField);
    hits
}

fn key(k: Key) -> InputEvent {
    InputEvent::Key(k)
}

fn pointer(phase: PointerPhase, x: f64, y: f64) -> InputEvent {
    InputEvent::Pointer(PointerEvent::new(phase, x, y))
}

#[test]
fn keys_drive_transport_volume_and_toggles() {
    let mut p = player();
    let mut router = InputRouter::new(10);
    let h = HitMap::default();

    router.handle(&mut p, &h, key(Key::Space));
    assert!(p.state().is_playing);
    router.handle(&mut p, &h, key(Key::ArrowRight));
    assert_eq!(p.state().current_index, 1);
    router.handle(&mut p, &h, key(Key::ArrowLeft));
    assert_eq!(p.state().current_index, 0);

    router.handle(&mut p, &h, key(Key::ArrowUp));
    assert_eq!(p.volume_percent(), 80);
    router.handle(&mut p, &h, key(Key::ArrowDown));
    router.handle(&mut p, &h, key(Key::ArrowDown));
    assert_eq!(p.volume_percent(), 60);

    router.handle(&mut p, &h, key(Key::Char('m')));
    assert_eq!(p.volume_percent(), 0);
    router.handle(&mut p, &h, key(Key::Char('M')));
    assert_eq!(p.volume_percent(), 70);

    router.handle(&mut p, &h, key(Key::Char('s')));
    assert!(p.state().is_shuffled);
    router.handle(&mut p, &h, key(Key::Char('r')));
    assert_eq!(p.state().repeat_mode, RepeatMode::All);
    router.handle(&mut p, &h, key(Key::Char('f')));
    assert!(p.state().favorites.contains(&p.state().current_index));

    assert_eq!(router.handle(&mut p, &h, key(Key::Char('q'))), Flow::Quit);
}

#[test]
fn search_focus_swallows_player_keys() {
    let mut p = player();
    let mut router = InputRouter::new(10);
    let h = HitMap::default();

    router.handle(&mut p, &h, key(Key::Char('/')));
    assert_eq!(router.focus(), Focus::Search);

    for c in "neon".chars() {
        router.handle(&mut p, &h, key(Key::Char(c)));
    }
    router.handle(&mut p, &h, key(Key::Space));
    router.handle(&mut p, &h, key(Key::ArrowRight));
    assert_eq!(router.query(), "neon ");
    assert!(!p.state().is_playing);
    assert_eq!(p.state().current_index, 0);
    assert!(!p.state().is_shuffled);
    assert_eq!(p.screen().visible_indices(), vec![1]);

    router.handle(&mut p, &h, key(Key::Backspace));
    assert_eq!(router.query(), "neon");

    // `q` is just a letter while searching.
    assert_eq!(
        router.handle(&mut p, &h, key(Key::Char('q'))),
        Flow::Continue
    );
    assert!(p.screen().visible_indices().is_empty());

    router.handle(&mut p, &h, key(Key::Esc));
    assert_eq!(router.focus(), Focus::Player);
    assert_eq!(router.query(), "");
    assert_eq!(p.screen().visible_indices(), vec![0, 1, 2]);
}

#[test]
fn enter_leaves_search_keeping_the_filter() {
    let mut p = player();
    let mut router = InputRouter::new(10);
    let h = HitMap::default();

    router.handle(&mut p, &h, InputEvent::SearchChanged("retro".into()));
    assert_eq!(p.screen().visible_indices(), vec![1]);

    router.handle(&mut p, &h, key(Key::Char('/')));
    router.handle(&mut p, &h, key(Key::Enter));
    assert_eq!(router.focus(), Focus::Player);
    assert_eq!(p.screen().visible_indices(), vec![1]);
}

#[test]
fn drag_seeks_until_release_and_ignores_later_moves() {
    let mut p = player();
    let mut router = InputRouter::new(10);
    let h = hits();

    // Moves before a press do nothing.
    router.handle(&mut p, &h, pointer(PointerPhase::Move, 60.0, 5.0));
    assert_eq!(p.state().position_secs, 0.0);

    router.handle(&mut p, &h, pointer(PointerPhase::Press, 30.0, 5.0));
    assert!(router.drag().is_active());
    assert_eq!(p.state().position_secs, 45.0);

    router.handle(&mut p, &h, pointer(PointerPhase::Move, 60.0, 5.0));
    router.handle(&mut p, &h, pointer(PointerPhase::Move, 60.0, 5.0));
    assert_eq!(p.state().position_secs, 112.5);

    // Dragging off the bar still seeks, clamped.
    router.handle(&mut p, &h, pointer(PointerPhase::Move, 400.0, 20.0));
    assert_eq!(p.state().position_secs, 225.0);

    router.handle(&mut p, &h, pointer(PointerPhase::Release, 400.0, 20.0));
    assert!(!router.drag().is_active());
    router.handle(&mut p, &h, pointer(PointerPhase::Move, 10.0, 5.0));
    assert_eq!(p.state().position_secs, 225.0);
}

#[test]
fn a_new_press_ends_a_drag_whose_release_was_lost() {
    let mut p = player();
    let mut router = InputRouter::new(10);
    let h = hits();

    router.handle(&mut p, &h, pointer(PointerPhase::Press, 30.0, 5.0));
    assert!(router.drag().is_active());

    // Press on the volume bar without a release in between.
    router.handle(&mut p, &h, pointer(PointerPhase::Press, 20.0, 7.0));
    assert!(!router.drag().is_active());
    router.handle(&mut p, &h, pointer(PointerPhase::Move, 90.0, 5.0));
    assert_eq!(p.state().position_secs, 45.0);

    // Pressing off every target ends it too.
    router.handle(&mut p, &h, pointer(PointerPhase::Press, 30.0, 5.0));
    router.handle(&mut p, &h, pointer(PointerPhase::Press, 300.0, 300.0));
    assert!(!router.drag().is_active());
}

#[test]
fn clicks_hit_volume_buttons_rows_and_hearts() {
    let mut p = player();
    let mut router = InputRouter::new(10);
    let h = hits();

    router.handle(&mut p, &h, pointer(PointerPhase::Press, 20.0, 7.0));
    assert_eq!(p.volume_percent(), 40);
    router.handle(&mut p, &h, pointer(PointerPhase::Release, 20.0, 7.0));
    assert!(!router.drag().is_active());

    router.handle(&mut p, &h, pointer(PointerPhase::Press, 61.0, 7.0));
    assert!(p.state().is_playing);
    router.handle(&mut p, &h, pointer(PointerPhase::Press, 61.0, 7.0));
    assert!(!p.state().is_playing);

    // The heart sits on top of its row.
    router.handle(&mut p, &h, pointer(PointerPhase::Press, 37.0, 9.0));
    assert!(p.state().favorites.contains(&1));
    assert_eq!(p.state().current_index, 0);

    router.handle(&mut p, &h, pointer(PointerPhase::Press, 5.0, 9.0));
    assert_eq!(p.state().current_index, 1);
    assert!(p.state().is_playing);
}

#[test]
fn clicking_the_search_field_takes_focus_and_clicking_away_drops_it() {
    let mut p = player();
    let mut router = InputRouter::new(10);
    let h = hits();

    router.handle(&mut p, &h, pointer(PointerPhase::Press, 3.0, 11.0));
    assert_eq!(router.focus(), Focus::Search);
    router.handle(&mut p, &h, pointer(PointerPhase::Press, 300.0, 300.0));
    assert_eq!(router.focus(), Focus::Player);
}

#[test]
fn hit_map_prefers_later_regions_and_finds_by_target() {
    let h = hits();
    assert_eq!(
        h.target_at(37.0, 9.0).map(|(_, t)| t),
        Some(Target::Favorite(FavoriteTarget::Track(1)))
    );
    assert_eq!(h.target_at(2.0, 9.0).map(|(_, t)| t), Some(Target::Entry(1)));
    assert!(h.target_at(200.0, 200.0).is_none());
    assert_eq!(
        h.region_of(Target::ProgressBar),
        Some(region(10.0, 5.0, 100.0, 1.0))
    );
}
