//! Cancellable one-shot tasks for the single-threaded UI loop.
//!
//! The submission sequence simulates latency with timers. Keeping those
//! timers as explicit scheduled tasks leaves the form state machine
//! independent of how the delay is produced, so a real network call can
//! later complete the same task instead of the clock.

use std::time::Instant;

/// Handle to a pending task, usable to cancel it before it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

#[derive(Debug)]
struct Scheduled<T> {
    id: TaskId,
    due: Instant,
    task: T,
}

/// Deadline-ordered one-shot tasks, polled from the UI loop.
#[derive(Debug)]
pub struct TaskQueue<T> {
    next_id: u64,
    pending: Vec<Scheduled<T>>,
}

impl<T> TaskQueue<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }

    pub fn schedule(&mut self, due: Instant, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled { id, due, task });
        id
    }

    /// Removes a pending task. Returns false when the task already fired
    /// or was cancelled earlier.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|scheduled| scheduled.id != id);
        self.pending.len() != before
    }

    /// Removes and returns every task due at `now`, earliest deadline
    /// first.
    pub fn poll(&mut self, now: Instant) -> Vec<T> {
        let mut due: Vec<Scheduled<T>> = Vec::new();
        let mut index = 0;
        while index < self.pending.len() {
            if self.pending[index].due <= now {
                due.push(self.pending.swap_remove(index));
            } else {
                index += 1;
            }
        }
        due.sort_by_key(|scheduled| (scheduled.due, scheduled.id.0));
        due.into_iter().map(|scheduled| scheduled.task).collect()
    }

    /// Earliest pending deadline, used to schedule the next repaint.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|scheduled| scheduled.due).min()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
