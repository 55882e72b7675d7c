//! Tests for utility functions

use tiered_task_queue::core::{Priority, ResourceVector};
use tiered_task_queue::util::{init_tracing, DEFAULT_FILTER};

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
    tracing::info!("tracing initialized");
    assert!(DEFAULT_FILTER.starts_with("tiered_task_queue"));
}

#[test]
fn test_priority_scan_order() {
    let levels: Vec<u8> = Priority::ALL.iter().map(|p| p.level()).collect();
    assert_eq!(levels, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_resource_vector_uniform() {
    let r = ResourceVector::uniform(4);
    assert_eq!(r, ResourceVector::new(4, 4, 4));
    assert!(ResourceVector::ZERO.fits_within(&r));
    assert!(!r.fits_within(&ResourceVector::ZERO));
}
