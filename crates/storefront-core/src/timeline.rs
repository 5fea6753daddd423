//! Virtual-clock scheduler for delayed continuations.
//!
//! The storefront never sleeps. Delayed work is scheduled on a [`Timeline`]
//! and fired when the host advances the clock. Every scheduled event has a
//! [`TimerHandle`] that can be cancelled until it fires.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use crate::state::NavStep;

/// Cancellation handle of a scheduled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// Payload delivered when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// One step of navigation transition `transition`.
    Navigation { transition: u64, step: NavStep },
}

#[derive(Debug, Default)]
pub struct Timeline {
    now: Duration,
    next_handle: u64,
    // Ordered by deadline, then by scheduling order.
    queue: BTreeMap<(Duration, TimerHandle), TimerEvent>,
    deadlines: HashMap<TimerHandle, Duration>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the timeline was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule(&mut self, delay: Duration, event: TimerEvent) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        let at = self.now.saturating_add(delay);
        self.queue.insert((at, handle), event);
        self.deadlines.insert(handle, at);
        handle
    }

    /// Cancel a pending event. Returns `false` if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.deadlines.remove(&handle) {
            Some(at) => self.queue.remove(&(at, handle)).is_some(),
            None => false,
        }
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.deadlines.contains_key(&handle)
    }

    /// Absolute time of the earliest pending event.
    pub fn next_due_at(&self) -> Option<Duration> {
        self.queue.first_key_value().map(|((at, _), _)| *at)
    }

    /// Time left until the earliest pending event.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.next_due_at().map(|at| at.saturating_sub(self.now))
    }

    /// Remove the earliest event due at or before `until`, moving the clock
    /// to its deadline.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerHandle, TimerEvent)> {
        let (&(at, handle), _) = self.queue.first_key_value()?;
        if at > until {
            return None;
        }
        let event = self.queue.remove(&(at, handle))?;
        self.deadlines.remove(&handle);
        self.now = self.now.max(at);
        Some((handle, event))
    }

    /// Move the clock forward. The clock never runs backwards.
    pub fn advance_to(&mut self, at: Duration) {
        self.now = self.now.max(at);
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
