//! Button trigger debouncing.

use crate::time::{TimeDuration, TimeInstant};

/// Filters raw button triggers closer together than a fixed window.
///
/// The debouncer is armed until it accepts its first trigger. After that a
/// trigger is accepted only when strictly more than `window` has elapsed since
/// the last accepted one; rejected triggers leave the state untouched, so a
/// burst of contact chatter never extends the cooldown.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer<I: TimeInstant> {
    window: I::Duration,
    last_accepted: Option<I>,
}

impl<I: TimeInstant> Debouncer<I> {
    /// Creates an armed debouncer.
    pub const fn new(window: I::Duration) -> Self {
        Self {
            window,
            last_accepted: None,
        }
    }

    /// Processes a raw trigger at `now`, returning true if it is accepted.
    pub fn accept(&mut self, now: I) -> bool {
        let armed = match self.last_accepted {
            None => true,
            Some(last) => now.duration_since(last).as_millis() > self.window.as_millis(),
        };

        if armed {
            self.last_accepted = Some(now);
        }
        armed
    }

    /// Returns the time of the last accepted trigger.
    pub fn last_accepted(&self) -> Option<I> {
        self.last_accepted
    }

    /// Returns the debounce window.
    pub fn window(&self) -> I::Duration {
        self.window
    }
}
