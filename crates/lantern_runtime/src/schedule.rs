//! Tick-based event scheduling.
//!
//! The queue holds callbacks due at a future tick. Entries fire in due order,
//! ties in insertion order. Repeating entries go back in the queue after
//! each firing until their [`CancelHandle`] is cancelled.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

/// A scheduled callback.
pub type Callback<C> = Box<dyn FnMut(&mut C) + Send>;

/// Cancels a scheduled entry. Clones share the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    /// Stops the entry from firing again.
    pub fn cancel(&self) {
        self.0.store(true, AtomicOrdering::Release);
    }

    /// Returns true once cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(AtomicOrdering::Acquire)
    }
}

struct Entry<C> {
    due: u64,
    seq: u64,
    period: Option<u64>,
    callback: Callback<C>,
    handle: CancelHandle,
}

impl<C> Entry<C> {
    fn key(&self) -> (u64, u64) {
        (self.due, self.seq)
    }
}

impl<C> PartialEq for Entry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<C> Eq for Entry<C> {}

impl<C> PartialOrd for Entry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C> Ord for Entry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Callbacks waiting for their tick.
pub struct EventQueue<C> {
    now: u64,
    next_seq: u64,
    entries: BinaryHeap<Reverse<Entry<C>>>,
}

impl<C> Default for EventQueue<C> {
    fn default() -> Self {
        Self::starting_at(0)
    }
}

impl<C> fmt::Debug for EventQueue<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventQueue")
            .field("now", &self.now)
            .field("pending", &self.entries.len())
            .finish()
    }
}

impl<C> EventQueue<C> {
    /// Creates an empty queue at tick 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue at the given tick.
    #[must_use]
    pub fn starting_at(now: u64) -> Self {
        Self {
            now,
            next_seq: 0,
            entries: BinaryHeap::new(),
        }
    }

    /// Schedules a callback `delay` ticks from now.
    ///
    /// A zero delay fires on the next update. Repeating entries fire every
    /// `delay` ticks (at least one). A one-shot entry's handle reads as
    /// cancelled once it has fired.
    pub fn add(&mut self, callback: Callback<C>, delay: u64, repeating: bool) -> CancelHandle {
        let delay = delay.max(1);
        let handle = CancelHandle::default();
        self.push(Entry {
            due: self.now + delay,
            seq: 0,
            period: repeating.then_some(delay),
            callback,
            handle: handle.clone(),
        });
        handle
    }

    /// Fires everything due at or before `now`, in order.
    ///
    /// Returns how many callbacks ran.
    pub fn update(&mut self, now: u64, ctx: &mut C) -> usize {
        let mut fired = 0;
        while self
            .entries
            .peek()
            .is_some_and(|Reverse(entry)| entry.due <= now)
        {
            let Some(Reverse(mut entry)) = self.entries.pop() else {
                break;
            };
            if entry.handle.is_cancelled() {
                continue;
            }
            self.now = entry.due;
            (entry.callback)(ctx);
            fired += 1;
            match entry.period {
                Some(period) if !entry.handle.is_cancelled() => {
                    entry.due += period;
                    self.push(entry);
                }
                Some(_) => {}
                None => entry.handle.cancel(),
            }
        }
        self.now = self.now.max(now);
        fired
    }

    /// The tick of the last update.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Entries still waiting, cancelled ones excluded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .iter()
            .filter(|Reverse(entry)| !entry.handle.is_cancelled())
            .count()
    }

    /// Returns true if nothing live is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, mut entry: Entry<C>) {
        entry.seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Reverse(entry));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(tag: &'static str) -> Callback<Vec<&'static str>> {
        Box::new(move |out: &mut Vec<&'static str>| out.push(tag))
    }

    #[test]
    fn fires_when_due() {
        let mut queue = EventQueue::new();
        let mut out = Vec::new();
        let handle = queue.add(log("a"), 3, false);

        assert_eq!(queue.update(2, &mut out), 0);
        assert!(out.is_empty());
        assert_eq!(queue.update(3, &mut out), 1);
        assert_eq!(out, ["a"]);
        assert!(queue.is_empty());
        assert!(handle.is_cancelled());
    }

    #[test]
    fn ties_fire_in_insertion_order() {
        let mut queue = EventQueue::new();
        let mut out = Vec::new();
        queue.add(log("b"), 2, false);
        queue.add(log("a"), 1, false);
        queue.add(log("c"), 2, false);
        queue.update(10, &mut out);
        assert_eq!(out, ["a", "b", "c"]);
    }

    #[test]
    fn cancelled_entries_never_fire() {
        let mut queue = EventQueue::new();
        let mut out = Vec::new();
        let handle = queue.add(log("a"), 1, false);
        handle.cancel();
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.update(5, &mut out), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn repeating_entries_catch_up_until_cancelled() {
        let mut queue = EventQueue::new();
        let mut out = Vec::new();
        let handle = queue.add(log("tick"), 2, true);

        queue.update(7, &mut out);
        assert_eq!(out.len(), 3);

        handle.cancel();
        queue.update(20, &mut out);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn delays_count_from_the_last_update() {
        let mut queue = EventQueue::starting_at(10);
        let mut out = Vec::new();
        queue.add(log("late"), 0, false);
        assert_eq!(queue.update(10, &mut out), 0);
        assert_eq!(queue.update(11, &mut out), 1);
        assert_eq!(queue.now(), 11);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn fires_in_due_order(delays in prop::collection::vec(0u64..20, 0..16)) {
            let mut queue: EventQueue<Vec<u64>> = EventQueue::new();
            for delay in &delays {
                let due = (*delay).max(1);
                queue.add(Box::new(move |out: &mut Vec<u64>| out.push(due)), *delay, false);
            }
            let mut out = Vec::new();
            let fired = queue.update(100, &mut out);
            prop_assert_eq!(fired, delays.len());
            let mut sorted = out.clone();
            sorted.sort_unstable();
            prop_assert_eq!(out, sorted);
        }
    }
}
