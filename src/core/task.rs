//! Plain value records: task identity, priority, resource vectors and tasks.

use serde::{Deserialize, Serialize};

use crate::core::QueueError;

/// Caller-assigned task identifier.
pub type TaskId = u64;

/// Priority level, 1 (highest) through 5 (lowest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Level 1.
    Highest,
    /// Level 2.
    High,
    /// Level 3.
    Middle,
    /// Level 4.
    Low,
    /// Level 5.
    Lowest,
}

impl Priority {
    /// All levels in scan order, highest first.
    pub const ALL: [Self; 5] = [
        Self::Highest,
        Self::High,
        Self::Middle,
        Self::Low,
        Self::Lowest,
    ];

    /// Numeric level in 1..=5.
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Highest => 1,
            Self::High => 2,
            Self::Middle => 3,
            Self::Low => 4,
            Self::Lowest => 5,
        }
    }

    /// Zero-based slot used to index per-tier storage.
    pub(crate) const fn slot(self) -> usize {
        match self {
            Self::Highest => 0,
            Self::High => 1,
            Self::Middle => 2,
            Self::Low => 3,
            Self::Lowest => 4,
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = QueueError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Self::Highest),
            2 => Ok(Self::High),
            3 => Ok(Self::Middle),
            4 => Ok(Self::Low),
            5 => Ok(Self::Lowest),
            other => Err(QueueError::InvalidPriority(other)),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.level())
    }
}

/// Resource request or availability snapshot.
///
/// Compared component-wise; never collapsed into a single scalar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceVector {
    /// Memory units.
    pub memory: u64,
    /// Compute core count.
    pub cpu_cores: u32,
    /// Accelerator count.
    pub gpu_count: u32,
}

impl ResourceVector {
    /// No resources at all.
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Create a resource vector.
    #[must_use]
    pub const fn new(memory: u64, cpu_cores: u32, gpu_count: u32) -> Self {
        Self {
            memory,
            cpu_cores,
            gpu_count,
        }
    }

    /// Same amount on every dimension.
    #[must_use]
    pub fn uniform(units: u32) -> Self {
        Self::new(u64::from(units), units, units)
    }

    /// True iff every dimension of `self` is `<=` the matching dimension of `available`.
    #[must_use]
    pub const fn fits_within(&self, available: &Self) -> bool {
        self.memory <= available.memory
            && self.cpu_cores <= available.cpu_cores
            && self.gpu_count <= available.gpu_count
    }
}

/// A unit of work as seen by the queue.
///
/// The queue never rewrites any field once the task is inserted; `result`
/// is a slot for whoever executes the task after it leaves the queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "P: Serialize"))]
#[serde(bound(deserialize = "P: serde::de::DeserializeOwned"))]
pub struct Task<P> {
    /// Unique identifier supplied by the caller.
    pub id: TaskId,
    /// Tier the task is filed under.
    pub priority: Priority,
    /// Resources required to run the task.
    pub resources: ResourceVector,
    /// Opaque payload.
    pub content: P,
    /// Opaque result slot, written outside the queue.
    pub result: Option<String>,
}

impl<P> Task<P> {
    /// Create a task with an empty result slot.
    pub const fn new(id: TaskId, priority: Priority, resources: ResourceVector, content: P) -> Self {
        Self {
            id,
            priority,
            resources,
            content,
            result: None,
        }
    }
}
