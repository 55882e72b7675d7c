//! Builders to construct schedulers from configuration.

pub mod queue_builder;

pub use queue_builder::{build_scheduler, build_shared, QueueBuilder};
