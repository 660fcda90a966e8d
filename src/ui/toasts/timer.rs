// SPDX-License-Identifier: MPL-2.0
//! Deadline timers for auto-hiding toasts.
//!
//! Timers never fire on their own: the manager asks for the ones that are
//! due on each tick. Cancelling removes the entry immediately, so a
//! cancelled timer can never be reported as due afterwards.

use super::view::ToastId;
use std::collections::HashMap;
use std::time::Instant;

/// Handle to a scheduled deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy)]
struct Entry {
    fires_at: Instant,
    toast: ToastId,
}

/// Pending deadlines keyed by timer handle.
#[derive(Debug, Default)]
pub struct Timers {
    next_id: u64,
    entries: HashMap<TimerId, Entry>,
}

impl Timers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a deadline for `toast` at `fires_at`.
    pub fn schedule(&mut self, fires_at: Instant, toast: ToastId) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, Entry { fires_at, toast });
        id
    }

    /// Invalidates a timer. Returns `true` if it was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.entries.remove(&id).is_some()
    }

    /// Removes and returns every timer due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<(TimerId, ToastId)> {
        let mut due: Vec<(Instant, TimerId, ToastId)> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.fires_at <= now)
            .map(|(id, entry)| (entry.fires_at, *id, entry.toast))
            .collect();
        due.sort_by_key(|(fires_at, id, _)| (*fires_at, *id));

        for (_, id, _) in &due {
            self.entries.remove(id);
        }

        due.into_iter().map(|(_, id, toast)| (id, toast)).collect()
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.values().map(|entry| entry.fires_at).min()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
