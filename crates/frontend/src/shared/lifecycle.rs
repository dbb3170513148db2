//! Screen lifetime tracking for async completions
//!
//! Network calls cannot be cancelled, so every completion checks a
//! [`GenerationTicket`] before touching screen state. Tickets go stale when the
//! screen unmounts (or when a newer request of the same kind supersedes them).

use leptos::prelude::on_cleanup;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Monotonic generation counter shared by a screen and its pending tasks
#[derive(Clone, Debug, Default)]
pub struct ScreenGeneration {
    counter: Arc<AtomicU64>,
}

/// Snapshot of a [`ScreenGeneration`] taken when an async task starts
#[derive(Clone, Debug)]
pub struct GenerationTicket {
    counter: Arc<AtomicU64>,
    issued: u64,
}

impl ScreenGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticket valid until the next `invalidate` / `next_ticket`
    pub fn ticket(&self) -> GenerationTicket {
        GenerationTicket {
            counter: self.counter.clone(),
            issued: self.counter.load(Ordering::SeqCst),
        }
    }

    /// Invalidate all outstanding tickets and return a fresh one
    pub fn next_ticket(&self) -> GenerationTicket {
        let issued = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        GenerationTicket {
            counter: self.counter.clone(),
            issued,
        }
    }

    /// Make every outstanding ticket stale
    pub fn invalidate(&self) {
        self.counter.fetch_add(1, Ordering::SeqCst);
    }

    /// Invalidate when the current reactive owner (the screen) is disposed
    pub fn invalidate_on_cleanup(&self) {
        let this = self.clone();
        on_cleanup(move || this.invalidate());
    }
}

impl GenerationTicket {
    pub fn is_current(&self) -> bool {
        self.counter.load(Ordering::SeqCst) == self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_goes_stale_on_invalidate() {
        let generation = ScreenGeneration::new();
        let ticket = generation.ticket();
        assert!(ticket.is_current());

        generation.invalidate();
        assert!(!ticket.is_current());
        assert!(generation.ticket().is_current());
    }

    #[test]
    fn test_next_ticket_supersedes_older_ones() {
        let generation = ScreenGeneration::new();
        let first = generation.next_ticket();
        let second = generation.next_ticket();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn test_clones_share_the_counter() {
        let generation = ScreenGeneration::new();
        let ticket = generation.ticket();
        generation.clone().invalidate();
        assert!(!ticket.is_current());
    }
}
