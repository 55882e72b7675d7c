//! Queue coordinator: keeps the ledger and the five tiers in step.
//!
//! Every public mutation validates against the ledger first, so a failed
//! call (duplicate id, unknown id, bad index, full queue) leaves both views
//! untouched. A successful call applies the ledger half and the tier half
//! together before returning.

use crate::core::ledger::{Iter, Ledger, NodeRef};
use crate::core::task::{Priority, Task, TaskId};
use crate::core::tier::{TierIndex, TierIter};
use crate::core::QueueError;

/// Priority task queue with global arrival order and per-priority tiers.
#[derive(Debug)]
pub struct TaskQueue<P> {
    id: u64,
    name: String,
    max_depth: Option<usize>,
    ledger: Ledger<P>,
    tiers: TierIndex,
}

impl<P> TaskQueue<P> {
    /// Create an unbounded queue.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            max_depth: None,
            ledger: Ledger::new(),
            tiers: TierIndex::new(),
        }
    }

    /// Reject insertions once `max_depth` tasks are queued.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Queue identifier.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Queue name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Configured depth limit, if any.
    #[must_use]
    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Number of queued tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ledger.len()
    }

    /// True when nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    /// Number of tasks filed under `priority`.
    #[must_use]
    pub fn tier_size(&self, priority: Priority) -> usize {
        self.tiers.tier(priority).len()
    }

    /// Ids filed under `priority`, oldest first.
    pub fn tier_ids(&self, priority: Priority) -> TierIter<'_> {
        self.tiers.tier(priority).iter()
    }

    /// Look up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task<P>> {
        self.ledger.get(id)
    }

    /// Look up a task and its neighbours in arrival order.
    #[must_use]
    pub fn get_node_by_id(&self, id: TaskId) -> Option<NodeRef<'_, P>> {
        self.ledger.node(id)
    }

    /// Iterate all tasks in ledger order.
    pub fn iter(&self) -> Iter<'_, P> {
        self.ledger.iter()
    }

    /// Read-only access to the ledger.
    #[must_use]
    pub const fn ledger(&self) -> &Ledger<P> {
        &self.ledger
    }

    /// Append `task` at the back of the queue.
    ///
    /// # Errors
    /// [`QueueError::QueueFull`] or [`QueueError::DuplicateId`]; nothing changes.
    pub fn append(&mut self, task: Task<P>) -> Result<(), QueueError> {
        self.ensure_capacity()?;
        let (id, priority) = (task.id, task.priority);
        self.ledger.append(task).inspect_err(|e| warn_rejected(id, e))?;
        self.track(id, priority);
        tracing::debug!(task_id = id, %priority, len = self.len(), "appended task");
        Ok(())
    }

    /// Same as [`TaskQueue::append`].
    ///
    /// # Errors
    /// See [`TaskQueue::append`].
    pub fn append_right(&mut self, task: Task<P>) -> Result<(), QueueError> {
        self.append(task)
    }

    /// Insert `task` at the front of the queue.
    ///
    /// # Errors
    /// [`QueueError::QueueFull`] or [`QueueError::DuplicateId`]; nothing changes.
    pub fn append_left(&mut self, task: Task<P>) -> Result<(), QueueError> {
        self.ensure_capacity()?;
        let (id, priority) = (task.id, task.priority);
        self.ledger.append_left(task).inspect_err(|e| warn_rejected(id, e))?;
        self.track(id, priority);
        tracing::debug!(task_id = id, %priority, len = self.len(), "prepended task");
        Ok(())
    }

    /// Insert `task` relative to position `index`; see [`Ledger::insert_at_index`].
    ///
    /// # Errors
    /// [`QueueError::QueueFull`], [`QueueError::InvalidIndex`] or
    /// [`QueueError::DuplicateId`]; nothing changes.
    pub fn insert_at_index(&mut self, index: usize, task: Task<P>) -> Result<(), QueueError> {
        self.ensure_capacity()?;
        let (id, priority) = (task.id, task.priority);
        self.ledger
            .insert_at_index(index, task)
            .inspect_err(|e| warn_rejected(id, e))?;
        self.track(id, priority);
        tracing::debug!(task_id = id, %priority, index, len = self.len(), "inserted task");
        Ok(())
    }

    /// Remove the task with `id`.
    ///
    /// # Errors
    /// [`QueueError::NotFound`] if no such task is queued.
    pub fn pop(&mut self, id: TaskId) -> Result<Task<P>, QueueError> {
        let task = self.ledger.pop(id)?;
        self.untrack(&task);
        Ok(task)
    }

    /// Remove the oldest task in ledger order.
    pub fn pop_left(&mut self) -> Option<Task<P>> {
        let task = self.ledger.pop_left()?;
        self.untrack(&task);
        Some(task)
    }

    /// Remove the newest task in ledger order.
    pub fn pop_right(&mut self) -> Option<Task<P>> {
        let task = self.ledger.pop_right()?;
        self.untrack(&task);
        Some(task)
    }

    /// Remove the task exactly at `index` in ledger order.
    ///
    /// # Errors
    /// [`QueueError::InvalidIndex`] if `index >= len`.
    pub fn pop_at_index(&mut self, index: usize) -> Result<Task<P>, QueueError> {
        let task = self.ledger.pop_at_index(index)?;
        self.untrack(&task);
        Ok(task)
    }

    /// Verify that the ledger size equals the sum of all tier sizes.
    ///
    /// # Errors
    /// [`QueueError::ConsistencyFault`] when the two views disagree. This
    /// is a defect in the coordinator, never a recoverable condition.
    pub fn check_consistency(&self) -> Result<(), QueueError> {
        let ledger = self.ledger.len();
        let tiers = self.tiers.total_len();
        if ledger != tiers {
            return Err(QueueError::ConsistencyFault { ledger, tiers });
        }
        Ok(())
    }

    fn ensure_capacity(&self) -> Result<(), QueueError> {
        match self.max_depth {
            Some(max_depth) if self.len() >= max_depth => {
                tracing::warn!(queue = %self.name, max_depth, "queue full, rejecting task");
                Err(QueueError::QueueFull { max_depth })
            }
            _ => Ok(()),
        }
    }

    fn track(&mut self, id: TaskId, priority: Priority) {
        let inserted = self.tiers.tier_mut(priority).insert(id);
        if !inserted {
            tracing::error!(task_id = id, %priority, "id already present in tier");
        }
        debug_assert!(inserted, "task {id} already filed in tier {priority}");
        self.debug_check();
    }

    fn untrack(&mut self, task: &Task<P>) {
        let removed = self.tiers.tier_mut(task.priority).remove(task.id);
        if !removed {
            tracing::error!(task_id = task.id, priority = %task.priority, "id missing from tier");
        }
        debug_assert!(removed, "task {} missing from tier {}", task.id, task.priority);
        tracing::debug!(task_id = task.id, priority = %task.priority, len = self.len(), "removed task");
        self.debug_check();
    }

    fn debug_check(&self) {
        let check = self.check_consistency();
        if let Err(e) = &check {
            tracing::error!(queue = %self.name, "{e}");
        }
        debug_assert!(check.is_ok(), "{check:?}");
    }
}

fn warn_rejected(id: TaskId, err: &QueueError) {
    tracing::warn!(task_id = id, "rejected insert: {err}");
}
