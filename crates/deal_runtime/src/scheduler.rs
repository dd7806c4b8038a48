//! Virtual clock for running scheduled reducer continuations without a browser.

use std::collections::BTreeMap;

use crate::model::TimerId;
use crate::reducer::{DealAction, Delay};

#[derive(Debug, Clone, Default)]
/// Ordered timer queue driven by explicit clock advances.
///
/// Entries fire by due time, then by scheduling order. [`Delay::NextFrame`] entries are due at
/// the current instant, so they run on the next [`Scheduler::pop_due`] pass rather than inside
/// the dispatch that scheduled them.
pub struct Scheduler {
    now_ms: u64,
    seq: u64,
    queue: BTreeMap<(u64, u64), (TimerId, DealAction)>,
}

impl Scheduler {
    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of timers that have not fired or been cancelled.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Due time of the earliest pending timer.
    pub fn next_due(&self) -> Option<u64> {
        self.queue.keys().next().map(|(due, _)| *due)
    }

    pub fn schedule(&mut self, timer: TimerId, delay: Delay, action: DealAction) {
        let due = match delay {
            Delay::NextFrame => self.now_ms,
            Delay::After(ms) => self.now_ms.saturating_add(u64::from(ms)),
        };
        self.seq = self.seq.saturating_add(1);
        self.queue.insert((due, self.seq), (timer, action));
    }

    /// Drops `timer` if still pending. Returns whether anything was removed.
    pub fn cancel(&mut self, timer: TimerId) -> bool {
        let key = self
            .queue
            .iter()
            .find(|(_, (id, _))| *id == timer)
            .map(|(key, _)| *key);
        key.and_then(|key| self.queue.remove(&key)).is_some()
    }

    /// Removes the earliest timer due at or before `until` and moves the clock to its due time.
    pub fn pop_due(&mut self, until: u64) -> Option<(TimerId, DealAction)> {
        let (&(due, seq), _) = self.queue.iter().next()?;
        if due > until {
            return None;
        }
        let entry = self.queue.remove(&(due, seq))?;
        self.now_ms = self.now_ms.max(due);
        Some(entry)
    }

    /// Moves the clock forward to `to` without firing anything.
    pub fn settle(&mut self, to: u64) {
        self.now_ms = self.now_ms.max(to);
    }
}
