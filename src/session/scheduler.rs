//! One-shot deferred tasks keyed by due tick.
//!
//! Every task carries a [`CancelToken`] shared with the phase that scheduled
//! it. Leaving the phase cancels the token and the task is dropped the next
//! time the scheduler drains, without ever running.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug)]
struct Scheduled<T> {
    token: CancelToken,
    task: T,
}

#[derive(Debug)]
pub struct Scheduler<T> {
    queue: BTreeMap<u64, Vec<Scheduled<T>>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            queue: BTreeMap::new(),
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `task` to run on tick `due`.
    pub fn schedule(&mut self, due: u64, token: CancelToken, task: T) {
        self.queue
            .entry(due)
            .or_default()
            .push(Scheduled { token, task });
    }

    /// Removes every task due at or before `now`, oldest first.
    ///
    /// Cancelled tasks are discarded rather than returned.
    pub fn drain_due(&mut self, now: u64) -> Vec<T> {
        let later = self.queue.split_off(&now.saturating_add(1));
        let due = std::mem::replace(&mut self.queue, later);
        due.into_values()
            .flatten()
            .filter(|scheduled| !scheduled.token.is_cancelled())
            .map(|scheduled| scheduled.task)
            .collect()
    }

    /// Tasks that are still going to run.
    pub fn pending(&self) -> usize {
        self.queue
            .values()
            .flatten()
            .filter(|scheduled| !scheduled.token.is_cancelled())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.pending() == 0
    }
}
