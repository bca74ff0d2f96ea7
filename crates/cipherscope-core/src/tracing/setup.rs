//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the cipherscope tracing/logging system.
///
/// Reads `CIPHERSCOPE_LOG` for per-module log levels, e.g.
/// `CIPHERSCOPE_LOG=cipherscope_analysis::search=debug,cipherscope=warn`.
/// Falls back to `cipherscope=info` when unset or invalid.
///
/// Idempotent. If the host process already installed a global subscriber,
/// that subscriber is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        install(filter);
    });
}

/// Like [`init_tracing`], with an explicit filter directive instead of the
/// environment. An unparsable directive falls back to the default filter.
pub fn init_tracing_with_filter(directive: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_new(directive)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        install(filter);
    });
}

fn install(filter: EnvFilter) {
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();
}
