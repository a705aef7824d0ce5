//! Generation-ticket debouncer.
//!
//! Every trigger hands out a fresh [`Ticket`] and invalidates the ones before
//! it. The host arms a timer per trigger; when a timer fires it asks
//! [`Debouncer::fire`] whether its ticket is still the latest. Only the last
//! trigger of a burst gets a yes. [`Debouncer::cancel`] invalidates every
//! outstanding ticket, so a timer that outlives its owner finds nothing to do.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Identifies one trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    generation: u64,
    pending: bool,
    cancelled: bool,
}

impl Debouncer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a trigger. Returns `None` once cancelled.
    pub fn trigger(&mut self) -> Option<Ticket> {
        if self.cancelled {
            return None;
        }
        self.generation += 1;
        self.pending = true;
        Some(Ticket(self.generation))
    }

    /// Whether `ticket` is the latest trigger and has not fired yet.
    /// Consumes the pending trigger on success.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if self.cancelled || !self.pending || ticket.0 != self.generation {
            return false;
        }
        self.pending = false;
        true
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending && !self.cancelled
    }

    /// Invalidate all outstanding tickets permanently.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.pending = false;
    }
}
