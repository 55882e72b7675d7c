//! Tests for error types

use tiered_task_queue::core::QueueError;

#[test]
fn test_duplicate_id_error() {
    let err = QueueError::DuplicateId(7);
    assert_eq!(format!("{err}"), "duplicate task id: 7");
}

#[test]
fn test_not_found_error() {
    let err = QueueError::NotFound(3);
    assert_eq!(format!("{err}"), "task id not found: 3");
}

#[test]
fn test_invalid_index_error() {
    let err = QueueError::InvalidIndex { index: 4, len: 2 };
    assert_eq!(format!("{err}"), "index 4 out of range for queue of length 2");
}

#[test]
fn test_consistency_fault_error() {
    let err = QueueError::ConsistencyFault { ledger: 3, tiers: 2 };
    assert_eq!(
        format!("{err}"),
        "consistency fault: ledger holds 3 tasks, tiers hold 2"
    );
}

#[test]
fn test_queue_full_error() {
    let err = QueueError::QueueFull { max_depth: 10 };
    assert_eq!(format!("{err}"), "queue full: max depth 10 reached");
}

#[test]
fn test_invalid_priority_error() {
    let err = QueueError::InvalidPriority(9);
    assert_eq!(format!("{err}"), "invalid priority level: 9 (expected 1..=5)");
}

#[test]
fn test_errors_convert_to_anyhow() {
    let result: tiered_task_queue::core::AppResult<()> = Err(QueueError::NotFound(1).into());
    assert_eq!(result.unwrap_err().to_string(), "task id not found: 1");
}
