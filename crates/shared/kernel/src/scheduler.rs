//! # Scheduler
//!
//! Delayed tasks over a caller-supplied clock. Time is a [`Duration`] since page start, so
//! the renderer decides where "now" comes from and tests can step it deterministically.
//!
//! Every scheduled task gets a [`TimerHandle`]; cancelling a handle guarantees the task is
//! never returned by [`Scheduler::pop_due`]. Tasks with equal deadlines fire in the order
//! they were scheduled.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Cancellation handle for one scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

/// A task that became due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Due<T> {
    pub handle: TimerHandle,
    /// The instant the task was scheduled for, which may be earlier than the tick that
    /// observed it.
    pub deadline: Duration,
    pub task: T,
}

#[derive(Debug)]
pub struct Scheduler<T> {
    queue: BTreeMap<(Duration, u64), T>,
    deadlines: HashMap<u64, Duration>,
    next_seq: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self { queue: BTreeMap::new(), deadlines: HashMap::new(), next_seq: 0 }
    }
}

impl<T> Scheduler<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `task` to fire at `now + delay`.
    pub fn schedule(&mut self, now: Duration, delay: Duration, task: T) -> TimerHandle {
        let seq = self.next_seq;
        self.next_seq += 1;

        let deadline = now.saturating_add(delay);
        self.queue.insert((deadline, seq), task);
        self.deadlines.insert(seq, deadline);

        TimerHandle(seq)
    }

    /// Cancels a pending task. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.deadlines
            .remove(&handle.0)
            .is_some_and(|deadline| self.queue.remove(&(deadline, handle.0)).is_some())
    }

    /// Cancels `handle` if present. Convenience for `Option<TimerHandle>` slots.
    pub fn cancel_slot(&mut self, slot: &mut Option<TimerHandle>) -> bool {
        slot.take().is_some_and(|handle| self.cancel(handle))
    }

    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.deadlines.contains_key(&handle.0)
    }

    /// Deadline of the earliest pending task.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Removes and returns the earliest task due at or before `now`.
    ///
    /// Pop one at a time so a task that cancels another one takes effect within the same tick.
    pub fn pop_due(&mut self, now: Duration) -> Option<Due<T>> {
        let entry = self.queue.first_entry()?;
        let (deadline, seq) = *entry.key();
        if deadline > now {
            return None;
        }

        let task = entry.remove();
        self.deadlines.remove(&seq);
        Some(Due { handle: TimerHandle(seq), deadline, task })
    }

    /// Removes every task due at or before `now`, in firing order.
    pub fn drain_due(&mut self, now: Duration) -> Vec<Due<T>> {
        std::iter::from_fn(|| self.pop_due(now)).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn fires_in_deadline_then_insertion_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(0), ms(300), "late");
        scheduler.schedule(ms(0), ms(100), "first");
        scheduler.schedule(ms(0), ms(100), "second");

        let fired: Vec<_> = scheduler.drain_due(ms(1000)).into_iter().map(|due| due.task).collect();
        assert_eq!(fired, vec!["first", "second", "late"]);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn nothing_fires_before_deadline() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(10), ms(5000), ());

        assert!(scheduler.pop_due(ms(5009)).is_none());
        let due = scheduler.pop_due(ms(5010)).expect("due at exactly the deadline");
        assert_eq!(due.deadline, ms(5010));
    }

    #[test]
    fn cancelled_task_never_fires() {
        let mut scheduler = Scheduler::new();
        let handle = scheduler.schedule(ms(0), ms(50), 1);
        scheduler.schedule(ms(0), ms(60), 2);

        assert!(scheduler.is_pending(handle));
        assert!(scheduler.cancel(handle));
        assert!(!scheduler.cancel(handle), "second cancel is a no-op");
        assert!(!scheduler.is_pending(handle));

        assert_eq!(scheduler.next_deadline(), Some(ms(60)));
        assert_eq!(scheduler.pop_due(ms(100)).map(|d| d.task), Some(2));
    }

    #[test]
    fn cancel_slot_clears_the_slot() {
        let mut scheduler = Scheduler::new();
        let mut slot = Some(scheduler.schedule(ms(0), ms(1), ()));

        assert!(scheduler.cancel_slot(&mut slot));
        assert!(slot.is_none());
        assert!(!scheduler.cancel_slot(&mut slot));
    }

    #[test]
    fn fired_handles_cannot_be_cancelled() {
        let mut scheduler = Scheduler::new();
        let handle = scheduler.schedule(ms(0), ms(0), ());
        assert!(scheduler.pop_due(ms(0)).is_some());
        assert!(!scheduler.cancel(handle));
    }
}
