//! Request generations: the newest query for a view wins.
//!
//! Every `begin` hands out a fresh [`Ticket`]. A response is applied only if
//! its ticket is still the latest one; anything that resolves after a newer
//! request started is dropped instead of overwriting fresher state.

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Monotonic ticket source for one view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generation {
    latest: u64,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket that supersedes every earlier one.
    pub fn next(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}
