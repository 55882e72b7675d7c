//! Per-priority tier index.
//!
//! A [`Tier`] is an insertion-ordered set of task ids. Membership is keyed
//! by id and each entry links to its neighbours by id, so insertion at the
//! tail and removal anywhere are O(1). Tiers never hold task data; the
//! ledger is the source of truth for task contents.

use std::collections::HashMap;

use crate::core::task::{Priority, TaskId};

#[derive(Debug, Clone, Copy, Default)]
struct Link {
    prev: Option<TaskId>,
    next: Option<TaskId>,
}

/// Insertion-ordered set of task ids for one priority level.
#[derive(Debug, Default)]
pub struct Tier {
    links: HashMap<TaskId, Link>,
    head: Option<TaskId>,
    tail: Option<TaskId>,
}

impl Tier {
    /// Create an empty tier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ids in the tier.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// True when the tier holds no ids.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// True if `id` is a member.
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.links.contains_key(&id)
    }

    /// Append `id` at the tail. Returns false if it was already present.
    pub fn insert(&mut self, id: TaskId) -> bool {
        if self.links.contains_key(&id) {
            return false;
        }
        let link = Link {
            prev: self.tail,
            next: None,
        };
        if let Some(tail) = self.tail.and_then(|t| self.links.get_mut(&t)) {
            tail.next = Some(id);
        } else {
            self.head = Some(id);
        }
        self.tail = Some(id);
        self.links.insert(id, link);
        true
    }

    /// Remove `id`. Returns false if it was not a member.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let Some(link) = self.links.remove(&id) else {
            return false;
        };
        match link.prev.and_then(|p| self.links.get_mut(&p)) {
            Some(prev) => prev.next = link.next,
            None => self.head = link.next,
        }
        match link.next.and_then(|n| self.links.get_mut(&n)) {
            Some(next) => next.prev = link.prev,
            None => self.tail = link.prev,
        }
        true
    }

    /// Remove and return the oldest id.
    pub fn pop_leftmost(&mut self) -> Option<TaskId> {
        let id = self.head?;
        self.remove(id);
        Some(id)
    }

    /// Remove and return the newest id.
    pub fn pop_rightmost(&mut self) -> Option<TaskId> {
        let id = self.tail?;
        self.remove(id);
        Some(id)
    }

    /// Iterate ids oldest first.
    pub fn iter(&self) -> TierIter<'_> {
        TierIter {
            tier: self,
            cursor: self.head,
        }
    }
}

/// Oldest-first iterator over a tier's ids.
#[derive(Debug)]
pub struct TierIter<'a> {
    tier: &'a Tier,
    cursor: Option<TaskId>,
}

impl Iterator for TierIter<'_> {
    type Item = TaskId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        self.cursor = self.tier.links.get(&id).and_then(|l| l.next);
        Some(id)
    }
}

/// The five tiers, indexed directly by [`Priority`].
#[derive(Debug, Default)]
pub struct TierIndex {
    tiers: [Tier; 5],
}

impl TierIndex {
    /// Create five empty tiers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tier for `priority`.
    #[must_use]
    pub const fn tier(&self, priority: Priority) -> &Tier {
        &self.tiers[priority.slot()]
    }

    /// Mutable tier for `priority`.
    pub fn tier_mut(&mut self, priority: Priority) -> &mut Tier {
        &mut self.tiers[priority.slot()]
    }

    /// Sum of all tier sizes.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.tiers.iter().map(Tier::len).sum()
    }
}
