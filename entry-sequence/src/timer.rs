//! Pending delayed events on a virtual clock.

use crate::transition::Event;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

#[derive(Debug)]
struct Pending {
    due: Duration,
    seq: u64,
    event: Event,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due, self.seq).cmp(&(other.due, other.seq))
    }
}

/// Timers fire by due time; ties fire in the order they were scheduled.
/// Delays are relative to the clock at the moment of scheduling, which is
/// the firing time of whatever event produced them.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_seq: u64,
    pending: BinaryHeap<Reverse<Pending>>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn schedule(&mut self, after: Duration, event: Event) {
        let pending = Pending {
            due: self.now + after,
            seq: self.next_seq,
            event,
        };
        self.next_seq += 1;
        self.pending.push(Reverse(pending));
    }

    /// Due time of the earliest pending timer.
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.peek().map(|Reverse(p)| p.due)
    }

    /// Pop the earliest timer due at or before `until`, moving the clock to
    /// its due time.
    pub fn pop_due(&mut self, until: Duration) -> Option<Event> {
        if self.next_due()? > until {
            return None;
        }
        let Reverse(pending) = self.pending.pop()?;
        self.now = self.now.max(pending.due);
        Some(pending.event)
    }

    /// Move the clock forward without firing anything.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}
