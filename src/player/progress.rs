//! Progress sources and the timer that drives them.

use std::time::{Duration, Instant};

/// Where a progress tick takes the position from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProgressSource {
    /// Read the live position from the media backend.
    Media,
    /// Advance by the timer period per tick; used when the backend could not play.
    Simulated,
}

/// A repeating timer bound to one `ProgressSource`.
///
/// Cancelling is dropping it.
#[derive(Debug, Clone)]
pub struct ProgressTimer {
    source: ProgressSource,
    period: Duration,
    next_due: Instant,
}

impl ProgressTimer {
    pub fn start(source: ProgressSource, period: Duration, now: Instant) -> Self {
        Self {
            source,
            period,
            next_due: now + period,
        }
    }

    pub fn source(&self) -> ProgressSource {
        self.source
    }

    /// Return true and schedule the next tick when the timer is due.
    ///
    /// A late event loop fires once, not once per missed period.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due += self.period;
        if self.next_due <= now {
            self.next_due = now + self.period;
        }
        true
    }
}

/// Horizontal extent of a bar on screen, in the same unit as pointer x.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BarGeometry {
    pub left: f64,
    pub width: f64,
}

impl BarGeometry {
    /// Fraction of the bar at `x`, clamped to `[0, 1]`. `None` for a
    /// zero-width bar.
    pub fn fraction_at(&self, x: f64) -> Option<f64> {
        if !(self.width > 0.0) || !x.is_finite() {
            return None;
        }
        Some(((x - self.left) / self.width).clamp(0.0, 1.0))
    }
}
