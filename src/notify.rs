//! Transient toast notifications.
//!
//! At most one notification exists at a time. Showing a new one replaces the
//! old one immediately; nothing is queued.

use std::time::{Duration, Instant};

/// How long each phase of a notification lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTimings {
    /// Slide-in time.
    pub enter: Duration,
    /// Time from creation until the exit slide starts.
    pub visible: Duration,
    /// Slide-out time before removal.
    pub exit: Duration,
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self {
            enter: Duration::from_millis(100),
            visible: Duration::from_millis(3000),
            exit: Duration::from_millis(300),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NotificationPhase {
    Entering,
    Visible,
    Exiting,
}

#[derive(Debug, Clone)]
struct Notification {
    message: String,
    shown_at: Instant,
}

/// A notification as it should be drawn right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Toast<'a> {
    pub message: &'a str,
    pub phase: NotificationPhase,
    /// Fraction of the toast pushed off screen, `0.0` fully shown.
    pub offset: f32,
}

#[derive(Debug, Clone)]
pub struct Notifier {
    timings: NotificationTimings,
    current: Option<Notification>,
}

impl Notifier {
    pub fn new(timings: NotificationTimings) -> Self {
        Self {
            timings,
            current: None,
        }
    }

    /// Replace whatever is showing with `message`.
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.current = Some(Notification {
            message: message.into(),
            shown_at: now,
        });
    }

    /// Drop the notification once its exit slide has finished.
    pub fn prune(&mut self, now: Instant) {
        if self.current.is_some() && self.toast(now).is_none() {
            self.current = None;
        }
    }

    #[cfg(test)]
    pub(crate) fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }

    pub fn toast(&self, now: Instant) -> Option<Toast<'_>> {
        let n = self.current.as_ref()?;
        let age = now.saturating_duration_since(n.shown_at);
        let t = &self.timings;

        let (phase, offset) = if age < t.enter {
            let shown = age.as_secs_f32() / t.enter.as_secs_f32();
            (NotificationPhase::Entering, 1.0 - shown)
        } else if age < t.visible {
            (NotificationPhase::Visible, 0.0)
        } else if age < t.visible + t.exit {
            let gone = (age - t.visible).as_secs_f32() / t.exit.as_secs_f32();
            (NotificationPhase::Exiting, gone)
        } else {
            return None;
        };

        Some(Toast {
            message: &n.message,
            phase,
            offset: offset.clamp(0.0, 1.0),
        })
    }
}
