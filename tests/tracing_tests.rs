#![cfg(all(feature = "lazy", feature = "tracing"))]
//! Diagnostics emitted through `tracing` while sequences run.
//!
//! These install a test-writer subscriber so the events show up under
//! `cargo test -- --nocapture`, and check that the diagnostic paths do not
//! change the values or errors callers see.

use lazyseq::prelude::*;
use rstest::{fixture, rstest};
use tracing_subscriber::EnvFilter;

#[fixture]
fn subscriber() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("lazyseq=trace"))
        .with_test_writer()
        .try_init();
}

#[rstest]
fn test_second_traversal_is_reported_and_rejected(#[from(subscriber)] _subscriber: ()) {
    let sequence = map(|x: i32| x + 1, [1, 2]);
    assert_eq!(to_vec(&sequence).unwrap(), vec![2, 3]);
    assert_eq!(
        to_vec(&sequence),
        Err(SequenceError::multiple_traversal("map"))
    );
}

#[rstest]
fn test_uneven_zip_is_reported_and_rejected(#[from(subscriber)] _subscriber: ()) {
    let result = to_vec(zip3([1, 2], [1, 2], [1]));
    assert_eq!(result, Err(SequenceError::uneven_length("zip3", 1)));
}

#[rstest]
fn test_invalid_init_count_is_reported_and_rejected(#[from(subscriber)] _subscriber: ()) {
    assert!(init(|n| n, 0).is_err());
}

#[rstest]
fn test_traced_pipeline_yields_same_values(#[from(subscriber)] _subscriber: ()) {
    let values = from_iter(1..=10)
        .skip(2)
        .take_while(|x: &i32| *x < 8)
        .collect_vec()
        .unwrap();
    assert_eq!(values, vec![3, 4, 5, 6, 7]);
}
