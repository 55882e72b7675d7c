//! Resource-admission scheduler.
//!
//! Selection walks the tiers from [`Priority::Highest`] to
//! [`Priority::Lowest`]. Inside a tier, ids are visited in arrival order and
//! the first task whose request fits the caller's budget is removed and
//! returned. Tasks that do not fit stay where they are, so a large task
//! never blocks smaller ones queued behind it in the same tier.
//!
//! Nothing here waits: when no task fits, the caller gets an explicit
//! outcome and decides when to ask again.

use crate::core::queue::TaskQueue;
use crate::core::task::{Priority, ResourceVector, Task, TaskId};
use crate::core::QueueError;

/// Outcome of scanning a single tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TierSelection<P> {
    /// The first admissible task, already removed from the queue.
    Selected(Task<P>),
    /// The tier holds tasks but none fits the budget.
    NoFit,
    /// The tier holds no tasks.
    EmptyTier,
}

impl<P> TierSelection<P> {
    /// The selected task, if any.
    pub fn into_task(self) -> Option<Task<P>> {
        match self {
            Self::Selected(task) => Some(task),
            Self::NoFit | Self::EmptyTier => None,
        }
    }
}

/// Outcome of scanning every tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<P> {
    /// The highest-priority admissible task, already removed from the queue.
    Selected(Task<P>),
    /// Tasks are queued but none fits the budget.
    NoFit,
    /// The queue is empty.
    Exhausted,
}

impl<P> Selection<P> {
    /// The selected task, if any.
    pub fn into_task(self) -> Option<Task<P>> {
        match self {
            Self::Selected(task) => Some(task),
            Self::NoFit | Self::Exhausted => None,
        }
    }

    /// True if a task was selected.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        matches!(self, Self::Selected(_))
    }
}

/// Priority-then-arrival selection over a [`TaskQueue`].
#[derive(Debug)]
pub struct ResourceScheduler<P> {
    queue: TaskQueue<P>,
}

impl<P> ResourceScheduler<P> {
    /// Wrap an existing queue.
    pub const fn new(queue: TaskQueue<P>) -> Self {
        Self { queue }
    }

    /// True iff `task` fits `available` on every dimension.
    #[must_use]
    pub const fn is_admissible(task: &Task<P>, available: &ResourceVector) -> bool {
        task.resources.fits_within(available)
    }

    /// Queue a task at the back of its tier.
    ///
    /// # Errors
    /// See [`TaskQueue::append`].
    pub fn enqueue(&mut self, task: Task<P>) -> Result<(), QueueError> {
        self.queue.append(task)
    }

    /// Remove and return the oldest admissible task of `priority`.
    pub fn select_from_tier(
        &mut self,
        priority: Priority,
        available: &ResourceVector,
    ) -> TierSelection<P> {
        if self.queue.tier_size(priority) == 0 {
            return TierSelection::EmptyTier;
        }

        let queue = &self.queue;
        let candidate = queue.tier_ids(priority).find(|id| {
            let Some(task) = queue.get(*id) else {
                tracing::error!(task_id = id, %priority, "tier id missing from ledger");
                debug_assert!(false, "tier id {id} missing from ledger");
                return false;
            };
            let fits = Self::is_admissible(task, available);
            tracing::trace!(task_id = id, %priority, fits, "admission check");
            fits
        });

        let Some(id) = candidate else {
            tracing::debug!(%priority, queued = self.queue.tier_size(priority), "no admissible task in tier");
            return TierSelection::NoFit;
        };
        self.take(id, priority)
    }

    /// Remove and return the best admissible task across all tiers.
    pub fn select_best(&mut self, available: &ResourceVector) -> Selection<P> {
        if self.queue.is_empty() {
            tracing::debug!(queue = self.queue.name(), "queue exhausted");
            return Selection::Exhausted;
        }
        for priority in Priority::ALL {
            if let TierSelection::Selected(task) = self.select_from_tier(priority, available) {
                return Selection::Selected(task);
            }
        }
        tracing::debug!(
            queue = self.queue.name(),
            queued = self.queue.len(),
            ?available,
            "no admissible task in any tier"
        );
        Selection::NoFit
    }

    /// The underlying queue.
    #[must_use]
    pub const fn queue(&self) -> &TaskQueue<P> {
        &self.queue
    }

    /// The underlying queue, for positional and by-id mutations.
    pub fn queue_mut(&mut self) -> &mut TaskQueue<P> {
        &mut self.queue
    }

    /// Unwrap into the underlying queue.
    pub fn into_queue(self) -> TaskQueue<P> {
        self.queue
    }

    fn take(&mut self, id: TaskId, priority: Priority) -> TierSelection<P> {
        match self.queue.pop(id) {
            Ok(task) => {
                tracing::debug!(task_id = id, %priority, remaining = self.queue.len(), "selected task");
                TierSelection::Selected(task)
            }
            Err(e) => {
                tracing::error!(task_id = id, %priority, "selected id could not be removed: {e}");
                debug_assert!(false, "selected id {id} could not be removed: {e}");
                TierSelection::NoFit
            }
        }
    }
}

impl<P> From<TaskQueue<P>> for ResourceScheduler<P> {
    fn from(queue: TaskQueue<P>) -> Self {
        Self::new(queue)
    }
}
