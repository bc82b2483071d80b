//! Audio backend: the trait the player drives and its rodio implementation.
//!
//! The player never talks to rodio directly. It calls `MediaBackend` and
//! reacts to the `MediaEvent`s the backend reports back.

mod backend;
mod player;
mod sink;
mod types;

pub use backend::MediaBackend;
pub use player::RodioBackend;
pub use types::MediaEvent;

#[cfg(test)]
pub(crate) mod fake;
#[cfg(test)]
mod tests;
