//! Thread-safe scheduler handle.
//!
//! The ledger and the tiers are guarded together by one `parking_lot::Mutex`.
//! Each call holds the lock for its whole duration, so no thread can observe
//! a ledger mutation without the matching tier mutation. Operations are
//! O(1) or O(tier size), which keeps a single coarse lock cheap.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::queue::TaskQueue;
use crate::core::scheduler::{ResourceScheduler, Selection, TierSelection};
use crate::core::task::{Priority, ResourceVector, Task, TaskId};
use crate::core::QueueError;

/// Cloneable handle to a scheduler shared between producers and consumers.
#[derive(Debug)]
pub struct SharedScheduler<P> {
    inner: Arc<Mutex<ResourceScheduler<P>>>,
}

impl<P> Clone for SharedScheduler<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P> SharedScheduler<P> {
    /// Share `scheduler` behind a lock.
    pub fn new(scheduler: ResourceScheduler<P>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(scheduler)),
        }
    }

    /// Queue a task.
    ///
    /// # Errors
    /// See [`TaskQueue::append`].
    pub fn enqueue(&self, task: Task<P>) -> Result<(), QueueError> {
        self.inner.lock().enqueue(task)
    }

    /// See [`ResourceScheduler::select_best`].
    pub fn select_best(&self, available: &ResourceVector) -> Selection<P> {
        self.inner.lock().select_best(available)
    }

    /// See [`ResourceScheduler::select_from_tier`].
    pub fn select_from_tier(
        &self,
        priority: Priority,
        available: &ResourceVector,
    ) -> TierSelection<P> {
        self.inner.lock().select_from_tier(priority, available)
    }

    /// Remove a queued task by id.
    ///
    /// # Errors
    /// [`QueueError::NotFound`] if no such task is queued.
    pub fn pop(&self, id: TaskId) -> Result<Task<P>, QueueError> {
        self.inner.lock().queue_mut().pop(id)
    }

    /// Number of queued tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().queue().len()
    }

    /// True when nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().queue().is_empty()
    }

    /// Number of tasks filed under `priority`.
    #[must_use]
    pub fn tier_size(&self, priority: Priority) -> usize {
        self.inner.lock().queue().tier_size(priority)
    }

    /// See [`TaskQueue::check_consistency`].
    ///
    /// # Errors
    /// [`QueueError::ConsistencyFault`] when ledger and tiers disagree.
    pub fn check_consistency(&self) -> Result<(), QueueError> {
        self.inner.lock().queue().check_consistency()
    }

    /// Run `f` against the queue while holding the lock.
    pub fn with_queue<R>(&self, f: impl FnOnce(&TaskQueue<P>) -> R) -> R {
        f(self.inner.lock().queue())
    }

    /// Run `f` against the queue mutably while holding the lock.
    pub fn with_queue_mut<R>(&self, f: impl FnOnce(&mut TaskQueue<P>) -> R) -> R {
        f(self.inner.lock().queue_mut())
    }
}

impl<P> From<ResourceScheduler<P>> for SharedScheduler<P> {
    fn from(scheduler: ResourceScheduler<P>) -> Self {
        Self::new(scheduler)
    }
}
