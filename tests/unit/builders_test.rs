//! Tests for builder modules

use tiered_task_queue::builders::{build_scheduler, QueueBuilder};
use tiered_task_queue::config::QueueConfig;
use tiered_task_queue::core::{Priority, QueueError, ResourceScheduler, ResourceVector, Task};

#[test]
fn test_queue_builder_defaults() {
    let builder = QueueBuilder::new("jobs");
    assert_eq!(builder.name(), "jobs");
    assert_eq!(builder.config().id, 1);
    assert_eq!(builder.config().max_depth, None);
}

#[test]
fn test_queue_builder_builds_bounded_queue() {
    let mut scheduler: ResourceScheduler<u8> = QueueBuilder::new("bounded")
        .with_id(5)
        .with_max_depth(1)
        .build()
        .unwrap();
    assert_eq!(scheduler.queue().id(), 5);
    assert_eq!(scheduler.queue().name(), "bounded");
    assert_eq!(scheduler.queue().max_depth(), Some(1));

    scheduler
        .enqueue(Task::new(1, Priority::High, ResourceVector::ZERO, 0))
        .unwrap();
    let err = scheduler
        .enqueue(Task::new(2, Priority::High, ResourceVector::ZERO, 0))
        .unwrap_err();
    assert_eq!(err, QueueError::QueueFull { max_depth: 1 });
}

#[test]
fn test_build_scheduler_rejects_invalid_config() {
    let cfg = QueueConfig {
        id: 1,
        name: "q".into(),
        max_depth: Some(0),
    };
    let err = build_scheduler::<u8>(&cfg).unwrap_err();
    assert!(matches!(err, QueueError::InvalidConfig(_)));
}

#[test]
fn test_queue_builder_from_config() {
    let cfg = QueueConfig {
        id: 2,
        name: "from-cfg".into(),
        max_depth: None,
    };
    let shared = QueueBuilder::from_config(cfg).build_shared::<String>().unwrap();
    assert!(shared.is_empty());
    assert_eq!(shared.with_queue(|q| q.name().to_string()), "from-cfg");
}
