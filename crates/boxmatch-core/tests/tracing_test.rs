//! Tracing setup.

use boxmatch_core::tracing::init_tracing;

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
    // the first call installed the global subscriber
    assert!(tracing_subscriber::fmt::try_init().is_err());
}
