//! Error types for queue and scheduler operations.

use thiserror::Error;

use crate::core::task::TaskId;

/// Errors produced by the ledger, the coordinator and the scheduler.
///
/// "No task fits the available resources" is not an error; it is reported
/// through [`crate::core::Selection`] and [`crate::core::TierSelection`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    /// A task with this id is already queued.
    #[error("duplicate task id: {0}")]
    DuplicateId(TaskId),
    /// No queued task has this id.
    #[error("task id not found: {0}")]
    NotFound(TaskId),
    /// Positional operation outside `0..len`.
    #[error("index {index} out of range for queue of length {len}")]
    InvalidIndex {
        /// Requested position.
        index: usize,
        /// Queue length at the time of the call.
        len: usize,
    },
    /// Ledger and tier sizes diverged. Indicates a coordination defect.
    #[error("consistency fault: ledger holds {ledger} tasks, tiers hold {tiers}")]
    ConsistencyFault {
        /// Number of nodes in the ledger.
        ledger: usize,
        /// Sum of all tier sizes.
        tiers: usize,
    },
    /// Priority level outside 1..=5.
    #[error("invalid priority level: {0} (expected 1..=5)")]
    InvalidPriority(u8),
    /// Configured maximum depth reached.
    #[error("queue full: max depth {max_depth} reached")]
    QueueFull {
        /// Configured maximum depth.
        max_depth: usize,
    },
    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
