//! Core queue structures, coordination and admission scheduling.

pub mod error;
pub mod task;
pub mod ledger;
pub mod tier;
pub mod queue;
pub mod scheduler;
pub mod shared;

pub use error::{AppResult, QueueError};
pub use ledger::{Ledger, NodeRef};
pub use queue::TaskQueue;
pub use scheduler::{ResourceScheduler, Selection, TierSelection};
pub use shared::SharedScheduler;
pub use task::{Priority, ResourceVector, Task, TaskId};
pub use tier::{Tier, TierIndex};
