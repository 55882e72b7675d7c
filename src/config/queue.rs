//! Queue configuration.

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::AppResult;

/// Environment variable holding the queue id.
pub const ENV_QUEUE_ID: &str = "TASK_QUEUE_ID";
/// Environment variable holding the queue name.
pub const ENV_QUEUE_NAME: &str = "TASK_QUEUE_NAME";
/// Environment variable holding the optional depth limit.
pub const ENV_QUEUE_MAX_DEPTH: &str = "TASK_QUEUE_MAX_DEPTH";

/// Queue configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Queue identifier.
    pub id: u64,
    /// Human-readable queue name, used in logs.
    pub name: String,
    /// Maximum queued tasks before inserts are rejected; unbounded if absent.
    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            id: 1,
            name: "default".into(),
            max_depth: None,
        }
    }
}

impl QueueConfig {
    /// Validate configuration values.
    ///
    /// # Errors
    /// Returns a description of the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".into());
        }
        if self.max_depth == Some(0) {
            return Err("max_depth must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse queue configuration from a JSON string and validate.
    ///
    /// # Errors
    /// Returns a parse or validation message.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load configuration from the environment, reading `.env` first if present.
    ///
    /// Unset variables fall back to [`QueueConfig::default`].
    ///
    /// # Errors
    /// Fails if a variable is set but unparsable, or validation fails.
    pub fn from_env() -> AppResult<Self> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("no .env file loaded: {e}");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let defaults = Self::default();
        let id = match lookup(ENV_QUEUE_ID) {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("{ENV_QUEUE_ID} is not a valid id: {raw}"))?,
            None => defaults.id,
        };
        let name = lookup(ENV_QUEUE_NAME).unwrap_or(defaults.name);
        let max_depth = lookup(ENV_QUEUE_MAX_DEPTH)
            .map(|raw| {
                raw.parse::<usize>()
                    .with_context(|| format!("{ENV_QUEUE_MAX_DEPTH} is not a valid depth: {raw}"))
            })
            .transpose()?;

        let cfg = Self { id, name, max_depth };
        cfg.validate().map_err(anyhow::Error::msg)?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_defaults() {
        let cfg = QueueConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, QueueConfig::default());
    }

    #[test]
    fn test_from_lookup_values() {
        let cfg = QueueConfig::from_lookup(lookup(&[
            (ENV_QUEUE_ID, "7"),
            (ENV_QUEUE_NAME, "gpu-jobs"),
            (ENV_QUEUE_MAX_DEPTH, "128"),
        ]))
        .unwrap();
        assert_eq!(cfg.id, 7);
        assert_eq!(cfg.name, "gpu-jobs");
        assert_eq!(cfg.max_depth, Some(128));
    }

    #[test]
    fn test_from_lookup_rejects_garbage() {
        assert!(QueueConfig::from_lookup(lookup(&[(ENV_QUEUE_ID, "abc")])).is_err());
        assert!(QueueConfig::from_lookup(lookup(&[(ENV_QUEUE_MAX_DEPTH, "-1")])).is_err());
        assert!(QueueConfig::from_lookup(lookup(&[(ENV_QUEUE_MAX_DEPTH, "0")])).is_err());
    }
}
