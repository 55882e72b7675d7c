//! # Tiered Task Queue
//!
//! An in-memory priority task queue with resource-admission scheduling.
//!
//! Producers enqueue tasks tagged with a priority level (1 = highest through
//! 5 = lowest) and a resource request. Consumers ask for the best task that
//! fits the resources they currently have free, and get an answer right away.
//! Nothing in this crate blocks waiting for resources.
//!
//! ## Structure
//!
//! - **Ledger**: doubly linked task sequence with an id index. O(1) insert at
//!   either end and O(1) removal by id; positional operations walk the list.
//! - **Tiers**: five insertion-ordered id sets, one per priority level.
//! - **Coordinator** ([`core::TaskQueue`]): keeps ledger and tiers in step
//!   under every mutation.
//! - **Scheduler** ([`core::ResourceScheduler`]): scans tiers from highest to
//!   lowest priority and, inside a tier, in arrival order, returning the first
//!   task whose request fits the budget. Tasks that don't fit stay queued.
//! - **Shared handle** ([`core::SharedScheduler`]): one `parking_lot` mutex
//!   around the whole scheduler for multi-threaded producers and consumers.
//!
//! ## Example
//!
//! ```rust
//! use tiered_task_queue::core::{
//!     Priority, ResourceScheduler, ResourceVector, Selection, Task, TaskQueue,
//! };
//!
//! let mut scheduler = ResourceScheduler::new(TaskQueue::new(1, "jobs"));
//! scheduler.enqueue(Task::new(1, Priority::Low, ResourceVector::new(4, 2, 0), "etl"))?;
//! scheduler.enqueue(Task::new(2, Priority::Highest, ResourceVector::new(64, 8, 1), "train"))?;
//!
//! // Not enough for the training job, so the lower-priority job is picked.
//! let budget = ResourceVector::new(16, 4, 0);
//! let picked = scheduler.select_best(&budget).into_task().map(|t| t.id);
//! assert_eq!(picked, Some(1));
//! assert_eq!(scheduler.select_best(&budget), Selection::NoFit);
//! # Ok::<(), tiered_task_queue::core::QueueError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core queue structures, coordination and admission scheduling.
pub mod core;
/// Configuration models for queues.
pub mod config;
/// Builders to construct schedulers from configuration.
pub mod builders;
/// Shared utilities.
pub mod util;
