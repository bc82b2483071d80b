use crate::audio::MediaBackend;
use crate::player::{BarGeometry, FavoriteTarget, Player};

use super::events::{InputEvent, Key, PointerEvent, PointerPhase};
use super::hits::{Control, HitMap, Target};

/// Progress-bar drag. Active between a press on the bar and the next release.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    bar: Option<BarGeometry>,
}

impl DragState {
    /// Start dragging on `bar`. The geometry is kept so moves outside the bar
    /// still seek.
    pub fn press(&mut self, bar: BarGeometry) {
        self.bar = Some(bar);
    }

    pub fn release(&mut self) {
        self.bar = None;
    }

    #[cfg(test)]
    pub(crate) fn is_active(&self) -> bool {
        self.bar.is_some()
    }

    pub fn bar(&self) -> Option<BarGeometry> {
        self.bar
    }
}

/// Where key presses go.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Player,
    Search,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Routes input events onto a `Player`.
#[derive(Debug, Clone)]
pub struct InputRouter {
    drag: DragState,
    focus: Focus,
    query: String,
    volume_step: i32,
}

impl InputRouter {
    pub fn new(volume_step: u8) -> Self {
        Self {
            drag: DragState::default(),
            focus: Focus::Player,
            query: String::new(),
            volume_step: i32::from(volume_step),
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    #[cfg(test)]
    pub(crate) fn drag(&self) -> DragState {
        self.drag
    }

    pub fn handle<B: MediaBackend>(
        &mut self,
        player: &mut Player<B>,
        hits: &HitMap,
        event: InputEvent,
    ) -> Flow {
        match event {
            InputEvent::Key(key) => match self.focus {
                Focus::Player => return self.handle_player_key(player, key),
                Focus::Search => self.handle_search_key(player, key),
            },
            InputEvent::Pointer(pointer) => self.handle_pointer(player, hits, pointer),
            InputEvent::SearchChanged(query) => {
                self.query = query;
                player.filter_list(&self.query);
            }
        }
        Flow::Continue
    }

    fn handle_player_key<B: MediaBackend>(&mut self, player: &mut Player<B>, key: Key) -> Flow {
        match key {
            Key::Space => player.toggle_play(),
            Key::ArrowLeft => player.previous(),
            Key::ArrowRight => player.next(),
            Key::ArrowUp => player.step_volume(self.volume_step),
            Key::ArrowDown => player.step_volume(-self.volume_step),
            Key::Char('m' | 'M') => player.toggle_mute(),
            Key::Char('s' | 'S') => player.toggle_shuffle(),
            Key::Char('r' | 'R') => player.toggle_repeat(),
            Key::Char('f' | 'F') => player.toggle_favorite(FavoriteTarget::Current),
            Key::Char('/') => self.focus = Focus::Search,
            Key::Char('q') => return Flow::Quit,
            _ => {}
        }
        Flow::Continue
    }

    fn handle_search_key<B: MediaBackend>(&mut self, player: &mut Player<B>, key: Key) {
        match key {
            Key::Esc => {
                self.focus = Focus::Player;
                if !self.query.is_empty() {
                    self.query.clear();
                    player.filter_list(&self.query);
                }
            }
            Key::Enter => self.focus = Focus::Player,
            Key::Backspace => {
                if self.query.pop().is_some() {
                    player.filter_list(&self.query);
                }
            }
            Key::Space => {
                self.query.push(' ');
                player.filter_list(&self.query);
            }
            Key::Char(c) if !c.is_control() => {
                self.query.push(c);
                player.filter_list(&self.query);
            }
            // Arrow keys belong to the text field while it has focus.
            _ => {}
        }
    }

    fn handle_pointer<B: MediaBackend>(
        &mut self,
        player: &mut Player<B>,
        hits: &HitMap,
        pointer: PointerEvent,
    ) {
        match pointer.phase {
            PointerPhase::Press => {
                // A new press always ends a drag whose release was lost.
                self.drag.release();
                let Some((region, target)) = hits.target_at(pointer.x, pointer.y) else {
                    self.focus = Focus::Player;
                    return;
                };
                self.focus = if target == Target::SearchField {
                    Focus::Search
                } else {
                    Focus::Player
                };
                match target {
                    Target::ProgressBar => {
                        let bar = region.bar();
                        self.drag.press(bar);
                        player.set_progress(pointer.x, bar);
                    }
                    Target::VolumeBar => {
                        if let Some(fraction) = region.bar().fraction_at(pointer.x) {
                            player.set_volume((fraction * 100.0) as f32);
                        }
                    }
                    Target::Control(control) => press_control(player, control),
                    Target::Entry(index) => player.play_from_list(index),
                    Target::Favorite(fav) => player.toggle_favorite(fav),
                    Target::SearchField => {}
                }
            }
            PointerPhase::Move => {
                if let Some(bar) = self.drag.bar() {
                    player.set_progress(pointer.x, bar);
                }
            }
            PointerPhase::Release => self.drag.release(),
        }
    }
}

fn press_control<B: MediaBackend>(player: &mut Player<B>, control: Control) {
    match control {
        Control::Previous => player.previous(),
        Control::PlayPause => player.toggle_play(),
        Control::Next => player.next(),
        Control::Shuffle => player.toggle_shuffle(),
        Control::Repeat => player.toggle_repeat(),
        Control::Mute => player.toggle_mute(),
    }
}
