#[cfg(test)]
#[path = "bounce_test.rs"]
mod bounce_test;

use crate::geometry::{Point, Rect};

/// Two-state bounce machine. The only way back to `Idle` is the host's
/// animation-completion signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BounceState {
    #[default]
    Idle,
    Bouncing,
}

/// What a click did to the bounce state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Landed on the widget while idle; bouncing now.
    Started,
    /// Landed on the widget mid-bounce; nothing changed.
    AlreadyBouncing,
    /// Missed the widget (or the widget has no box).
    Missed,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Bounce {
    state: BounceState,
}

impl Bounce {
    #[must_use]
    pub fn state(&self) -> BounceState {
        self.state
    }

    #[must_use]
    pub fn is_bouncing(&self) -> bool {
        self.state == BounceState::Bouncing
    }

    /// Hit-test `pt` against `rect` and start a bounce if it lands while idle.
    pub fn click(&mut self, pt: Point, rect: Option<Rect>) -> ClickOutcome {
        if !rect.is_some_and(|r| r.contains(pt)) {
            return ClickOutcome::Missed;
        }
        match self.state {
            BounceState::Bouncing => ClickOutcome::AlreadyBouncing,
            BounceState::Idle => {
                self.state = BounceState::Bouncing;
                ClickOutcome::Started
            }
        }
    }

    /// The bounce animation finished. Clears unconditionally.
    pub fn finish(&mut self) {
        self.state = BounceState::Idle;
    }
}
