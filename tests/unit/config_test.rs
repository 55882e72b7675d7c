//! Tests for configuration validation

use serial_test::serial;
use tiered_task_queue::config::queue::{ENV_QUEUE_ID, ENV_QUEUE_MAX_DEPTH, ENV_QUEUE_NAME};
use tiered_task_queue::config::QueueConfig;

fn clear_queue_env() {
    for key in [ENV_QUEUE_ID, ENV_QUEUE_NAME, ENV_QUEUE_MAX_DEPTH] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_queue_config_validation() {
    let valid = QueueConfig {
        id: 1,
        name: "q1".to_string(),
        max_depth: Some(100),
    };
    assert!(valid.validate().is_ok());
    assert!(QueueConfig::default().validate().is_ok());
}

#[test]
fn test_queue_config_empty_name() {
    let invalid = QueueConfig {
        id: 1,
        name: "  ".to_string(),
        max_depth: None,
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_queue_config_zero_depth() {
    let invalid = QueueConfig {
        id: 1,
        name: "q1".to_string(),
        max_depth: Some(0),
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_queue_config_from_json() {
    let json = r#"{
        "id": 3,
        "name": "inference",
        "max_depth": 500
    }"#;

    let config = QueueConfig::from_json_str(json).unwrap();
    assert_eq!(config.id, 3);
    assert_eq!(config.name, "inference");
    assert_eq!(config.max_depth, Some(500));
}

#[test]
fn test_queue_config_from_json_without_depth() {
    let config = QueueConfig::from_json_str(r#"{ "id": 1, "name": "q" }"#).unwrap();
    assert_eq!(config.max_depth, None);
}

#[test]
fn test_queue_config_from_bad_json() {
    let err = QueueConfig::from_json_str(r#"{ "id": "x" }"#).unwrap_err();
    assert!(err.starts_with("parse error"));

    let err = QueueConfig::from_json_str(r#"{ "id": 1, "name": "" }"#).unwrap_err();
    assert!(err.contains("name"));
}

#[test]
#[serial]
fn test_queue_config_from_env() {
    clear_queue_env();
    std::env::set_var(ENV_QUEUE_ID, "42");
    std::env::set_var(ENV_QUEUE_NAME, "render-farm");
    std::env::set_var(ENV_QUEUE_MAX_DEPTH, "16");

    let cfg = QueueConfig::from_env();
    clear_queue_env();

    let cfg = cfg.unwrap();
    assert_eq!(cfg.id, 42);
    assert_eq!(cfg.name, "render-farm");
    assert_eq!(cfg.max_depth, Some(16));
}

#[test]
#[serial]
fn test_queue_config_from_env_rejects_bad_depth() {
    clear_queue_env();
    std::env::set_var(ENV_QUEUE_NAME, "render-farm");
    std::env::set_var(ENV_QUEUE_MAX_DEPTH, "lots");

    let result = QueueConfig::from_env();
    clear_queue_env();

    let err = result.unwrap_err();
    assert!(err.to_string().contains(ENV_QUEUE_MAX_DEPTH));
}
