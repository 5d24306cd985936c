//! A framework-free debounce slot.
//!
//! The slot never sleeps itself. Each `schedule` hands back a ticket that the
//! caller redeems once its timer elapses; only the ticket from the latest
//! `schedule` yields the pending value, and only once.

/// Handle for one scheduled computation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DebounceTicket {
    generation: u64,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Debouncer<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }
}

impl<T> Debouncer<T> {
    /// Replaces any pending value. Earlier tickets become stale.
    pub fn schedule(&mut self, value: T) -> DebounceTicket {
        self.generation += 1;
        self.pending = Some(value);
        DebounceTicket {
            generation: self.generation,
        }
    }

    /// Takes the pending value if `ticket` is the most recent one.
    pub fn redeem(&mut self, ticket: DebounceTicket) -> Option<T> {
        if ticket.generation != self.generation {
            return None;
        }
        self.pending.take()
    }

    /// Drops the pending value and invalidates every outstanding ticket.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }
}
