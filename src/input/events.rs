/// Keys the player reacts to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    Space,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Backspace,
    Enter,
    Esc,
    Char(char),
}

/// Press, move and release of a mouse button or a touch point.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointerPhase {
    Press,
    Move,
    Release,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, x: f64, y: f64) -> Self {
        Self { phase, x, y }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key(Key),
    Pointer(PointerEvent),
    /// The search text changed to the given query.
    SearchChanged(String),
}
