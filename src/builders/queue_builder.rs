//! Builders to construct schedulers from configuration.

use crate::config::QueueConfig;
use crate::core::{QueueError, ResourceScheduler, SharedScheduler, TaskQueue};

/// Build a scheduler from validated configuration.
///
/// # Errors
/// [`QueueError::InvalidConfig`] if `cfg` fails validation.
pub fn build_scheduler<P>(cfg: &QueueConfig) -> Result<ResourceScheduler<P>, QueueError> {
    cfg.validate()
        .map_err(|e| QueueError::InvalidConfig(format!("queue `{}`: {e}", cfg.name)))?;

    let mut queue = TaskQueue::new(cfg.id, cfg.name.clone());
    if let Some(max_depth) = cfg.max_depth {
        queue = queue.with_max_depth(max_depth);
    }
    tracing::info!(queue_id = cfg.id, queue = %cfg.name, max_depth = ?cfg.max_depth, "built task queue");
    Ok(ResourceScheduler::new(queue))
}

/// Build a lock-protected scheduler from validated configuration.
///
/// # Errors
/// [`QueueError::InvalidConfig`] if `cfg` fails validation.
pub fn build_shared<P>(cfg: &QueueConfig) -> Result<SharedScheduler<P>, QueueError> {
    build_scheduler(cfg).map(SharedScheduler::new)
}

/// Fluent builder over [`QueueConfig`].
#[derive(Debug, Clone)]
pub struct QueueBuilder {
    config: QueueConfig,
}

impl QueueBuilder {
    /// Start a builder for a queue called `name` with default settings.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: QueueConfig {
                name: name.into(),
                ..QueueConfig::default()
            },
        }
    }

    /// Start from an existing configuration.
    #[must_use]
    pub const fn from_config(config: QueueConfig) -> Self {
        Self { config }
    }

    /// Set the queue id.
    #[must_use]
    pub fn with_id(mut self, id: u64) -> Self {
        self.config.id = id;
        self
    }

    /// Bound the queue depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = Some(max_depth);
        self
    }

    /// Name of the queue being built.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &QueueConfig {
        &self.config
    }

    /// Build a scheduler.
    ///
    /// # Errors
    /// [`QueueError::InvalidConfig`] if the configuration is invalid.
    pub fn build<P>(&self) -> Result<ResourceScheduler<P>, QueueError> {
        build_scheduler(&self.config)
    }

    /// Build a lock-protected scheduler.
    ///
    /// # Errors
    /// [`QueueError::InvalidConfig`] if the configuration is invalid.
    pub fn build_shared<P>(&self) -> Result<SharedScheduler<P>, QueueError> {
        build_shared(&self.config)
    }
}
