//! Tests for tracing initialization.

use cipherscope_core::tracing::{init_tracing, init_tracing_with_filter};

/// Repeated initialization, through either entry point, is a no-op.
#[test]
fn test_init_tracing_idempotent() {
    init_tracing_with_filter("cipherscope_core=debug");
    init_tracing();
    init_tracing();
    tracing::info!(target: "cipherscope_core", "tracing initialized");
}
