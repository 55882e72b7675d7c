//! Ordered ledger: a doubly linked task sequence with an id index.
//!
//! Nodes live in an arena and link to each other through arena handles
//! rather than pointers. The id index maps every queued [`TaskId`] to the
//! handle of its node, which gives O(1) insertion at either end and O(1)
//! removal by id. Only positional operations walk the list.
//!
//! # Positional conventions
//!
//! - [`Ledger::insert_at_index`] with `index == 0` makes the task the new
//!   head. Any other valid `index` places the task directly *after* the task
//!   currently at `index`, so it lands at `index + 1`. For `index == len - 1`
//!   that is the same as [`Ledger::append`].
//! - [`Ledger::pop_at_index`] removes the task that is exactly at `index`.

use std::collections::HashMap;

use crate::core::task::{Task, TaskId};
use crate::core::QueueError;

/// Stable address of a node inside the ledger arena.
///
/// A handle stays valid for as long as its node is linked; freed slots are
/// recycled for later insertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct NodeHandle(usize);

/// Arena entry wrapping exactly one task.
#[derive(Debug)]
struct Node<P> {
    task: Task<P>,
    prev: Option<NodeHandle>,
    next: Option<NodeHandle>,
}

/// Borrowed view of a linked node.
#[derive(Debug)]
pub struct NodeRef<'a, P> {
    task: &'a Task<P>,
    prev: Option<TaskId>,
    next: Option<TaskId>,
}

impl<'a, P> NodeRef<'a, P> {
    /// Id of the wrapped task.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.task.id
    }

    /// The wrapped task.
    #[must_use]
    pub const fn task(&self) -> &'a Task<P> {
        self.task
    }

    /// Id of the previous task, `None` at the head.
    #[must_use]
    pub const fn prev_id(&self) -> Option<TaskId> {
        self.prev
    }

    /// Id of the next task, `None` at the tail.
    #[must_use]
    pub const fn next_id(&self) -> Option<TaskId> {
        self.next
    }
}

/// Doubly linked task sequence with an id index.
#[derive(Debug)]
pub struct Ledger<P> {
    slots: Vec<Option<Node<P>>>,
    free: Vec<usize>,
    index: HashMap<TaskId, NodeHandle>,
    head: Option<NodeHandle>,
    tail: Option<NodeHandle>,
}

impl<P> Default for Ledger<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Ledger<P> {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            index: HashMap::new(),
            head: None,
            tail: None,
        }
    }

    /// Number of linked tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True when no task is linked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// True if a task with `id` is linked.
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.index.contains_key(&id)
    }

    /// Look up a task without removing it.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task<P>> {
        self.index.get(&id).map(|h| &self.at(*h).task)
    }

    /// Look up a task together with the ids of its neighbours.
    #[must_use]
    pub fn node(&self, id: TaskId) -> Option<NodeRef<'_, P>> {
        let node = self.at(*self.index.get(&id)?);
        Some(NodeRef {
            task: &node.task,
            prev: node.prev.map(|h| self.at(h).task.id),
            next: node.next.map(|h| self.at(h).task.id),
        })
    }

    /// Id of the first task.
    #[must_use]
    pub fn head_id(&self) -> Option<TaskId> {
        self.head.map(|h| self.at(h).task.id)
    }

    /// Id of the last task.
    #[must_use]
    pub fn tail_id(&self) -> Option<TaskId> {
        self.tail.map(|h| self.at(h).task.id)
    }

    /// Iterate tasks from head to tail.
    pub fn iter(&self) -> Iter<'_, P> {
        Iter {
            ledger: self,
            cursor: self.head,
            remaining: self.len(),
        }
    }

    /// Link `task` after the current tail.
    ///
    /// # Errors
    /// [`QueueError::DuplicateId`] if the id is already linked; nothing changes.
    pub fn append(&mut self, task: Task<P>) -> Result<(), QueueError> {
        self.ensure_absent(task.id)?;
        let id = task.id;
        let handle = self.allocate(task, self.tail, None);
        match self.tail {
            Some(tail) => self.at_mut(tail).next = Some(handle),
            None => self.head = Some(handle),
        }
        self.tail = Some(handle);
        self.index.insert(id, handle);
        Ok(())
    }

    /// Link `task` before the current head.
    ///
    /// # Errors
    /// [`QueueError::DuplicateId`] if the id is already linked; nothing changes.
    pub fn append_left(&mut self, task: Task<P>) -> Result<(), QueueError> {
        self.ensure_absent(task.id)?;
        let id = task.id;
        let handle = self.allocate(task, None, self.head);
        match self.head {
            Some(head) => self.at_mut(head).prev = Some(handle),
            None => self.tail = Some(handle),
        }
        self.head = Some(handle);
        self.index.insert(id, handle);
        Ok(())
    }

    /// Unlink and return the head task, if any.
    pub fn pop_left(&mut self) -> Option<Task<P>> {
        self.head.map(|h| self.unlink(h))
    }

    /// Unlink and return the tail task, if any.
    pub fn pop_right(&mut self) -> Option<Task<P>> {
        self.tail.map(|h| self.unlink(h))
    }

    /// Unlink and return the task with `id`.
    ///
    /// # Errors
    /// [`QueueError::NotFound`] if no task has this id.
    pub fn pop(&mut self, id: TaskId) -> Result<Task<P>, QueueError> {
        let handle = *self.index.get(&id).ok_or(QueueError::NotFound(id))?;
        Ok(self.unlink(handle))
    }

    /// Insert `task` relative to position `index`.
    ///
    /// `index == 0` makes `task` the new head; otherwise `task` is linked
    /// right after the task currently at `index`. See the module docs.
    ///
    /// # Errors
    /// [`QueueError::InvalidIndex`] if `index >= len`, then
    /// [`QueueError::DuplicateId`] if the id is already linked. Nothing
    /// changes on error.
    pub fn insert_at_index(&mut self, index: usize, task: Task<P>) -> Result<(), QueueError> {
        self.ensure_in_range(index)?;
        self.ensure_absent(task.id)?;

        if index == 0 {
            return self.append_left(task);
        }
        if index == self.len() - 1 {
            return self.append(task);
        }

        let anchor = self.handle_at(index);
        let next = self.at(anchor).next;
        let id = task.id;
        let handle = self.allocate(task, Some(anchor), next);
        self.at_mut(anchor).next = Some(handle);
        // anchor is not the tail here, so `next` is always linked
        if let Some(next) = next {
            self.at_mut(next).prev = Some(handle);
        }
        self.index.insert(id, handle);
        Ok(())
    }

    /// Unlink and return the task exactly at position `index`.
    ///
    /// # Errors
    /// [`QueueError::InvalidIndex`] if `index >= len`; nothing changes.
    pub fn pop_at_index(&mut self, index: usize) -> Result<Task<P>, QueueError> {
        self.ensure_in_range(index)?;
        let handle = self.handle_at(index);
        Ok(self.unlink(handle))
    }

    /// Walk the list and verify its link structure against the id index.
    ///
    /// Checks that end links are empty exactly at the ends, that every
    /// `next` is mirrored by a `prev`, and that the traversal length equals
    /// the number of indexed ids. O(n); intended for tests and diagnostics.
    #[must_use]
    pub fn links_consistent(&self) -> bool {
        let (Some(head), Some(tail)) = (self.head, self.tail) else {
            return self.head.is_none() && self.tail.is_none() && self.index.is_empty();
        };
        if self.at(head).prev.is_some() || self.at(tail).next.is_some() {
            return false;
        }

        let mut count = 0;
        let mut prev = None;
        let mut cursor = Some(head);
        while let Some(handle) = cursor {
            let node = self.at(handle);
            if node.prev != prev || self.index.get(&node.task.id) != Some(&handle) {
                return false;
            }
            count += 1;
            if count > self.index.len() {
                return false;
            }
            prev = Some(handle);
            cursor = node.next;
        }
        prev == Some(tail) && count == self.index.len()
    }

    fn ensure_absent(&self, id: TaskId) -> Result<(), QueueError> {
        if self.index.contains_key(&id) {
            return Err(QueueError::DuplicateId(id));
        }
        Ok(())
    }

    fn ensure_in_range(&self, index: usize) -> Result<(), QueueError> {
        if index >= self.len() {
            return Err(QueueError::InvalidIndex {
                index,
                len: self.len(),
            });
        }
        Ok(())
    }

    fn at(&self, handle: NodeHandle) -> &Node<P> {
        match self.slots.get(handle.0) {
            Some(Some(node)) => node,
            _ => unreachable!("stale ledger handle {handle:?}"),
        }
    }

    fn at_mut(&mut self, handle: NodeHandle) -> &mut Node<P> {
        match self.slots.get_mut(handle.0) {
            Some(Some(node)) => node,
            _ => unreachable!("stale ledger handle {handle:?}"),
        }
    }

    fn allocate(
        &mut self,
        task: Task<P>,
        prev: Option<NodeHandle>,
        next: Option<NodeHandle>,
    ) -> NodeHandle {
        let node = Some(Node { task, prev, next });
        if let Some(slot) = self.free.pop() {
            self.slots[slot] = node;
            NodeHandle(slot)
        } else {
            self.slots.push(node);
            NodeHandle(self.slots.len() - 1)
        }
    }

    /// Handle of the node at `index`, walking from the nearer end.
    /// Caller guarantees `index < len`.
    fn handle_at(&self, index: usize) -> NodeHandle {
        let len = self.len();
        let (mut cursor, steps, forward) = if index <= len / 2 {
            (self.head, index, true)
        } else {
            (self.tail, len - 1 - index, false)
        };
        for _ in 0..steps {
            cursor = cursor.and_then(|h| {
                let node = self.at(h);
                if forward {
                    node.next
                } else {
                    node.prev
                }
            });
        }
        match cursor {
            Some(handle) => handle,
            None => unreachable!("index {index} checked against length {len}"),
        }
    }

    /// Rewire the neighbours of `handle`, free its slot and return the task.
    fn unlink(&mut self, handle: NodeHandle) -> Task<P> {
        let Some(node) = self.slots[handle.0].take() else {
            unreachable!("stale ledger handle {handle:?}");
        };
        self.free.push(handle.0);

        match node.prev {
            Some(prev) => self.at_mut(prev).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.at_mut(next).prev = node.prev,
            None => self.tail = node.prev,
        }
        self.index.remove(&node.task.id);
        node.task
    }
}

/// Head-to-tail iterator over ledger tasks.
#[derive(Debug)]
pub struct Iter<'a, P> {
    ledger: &'a Ledger<P>,
    cursor: Option<NodeHandle>,
    remaining: usize,
}

impl<'a, P> Iterator for Iter<'a, P> {
    type Item = &'a Task<P>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.ledger.at(self.cursor?);
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.task)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<P> ExactSizeIterator for Iter<'_, P> {}

impl<'a, P> IntoIterator for &'a Ledger<P> {
    type Item = &'a Task<P>;
    type IntoIter = Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
