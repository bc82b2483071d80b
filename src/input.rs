//! Input events and their routing onto the player.
//!
//! The terminal front end translates raw events into `InputEvent`s; the
//! `InputRouter` owns the state that spans several events (the progress-bar
//! drag and the search field focus) and calls into the `Player`.

mod events;
mod hits;
mod router;

pub use events::{InputEvent, Key, PointerEvent, PointerPhase};
pub use hits::{Control, HitMap, Region, Target};
pub use router::{Flow, Focus, InputRouter};

#[cfg(test)]
mod tests;
