//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the boxmatch tracing/logging system.
///
/// Reads `BOXMATCH_LOG` for per-module log levels, e.g.
/// `BOXMATCH_LOG=boxmatch_engine::matching=debug,boxmatch_engine::index=info`.
///
/// Falls back to `boxmatch=info` if `BOXMATCH_LOG` is not set or is invalid.
/// Idempotent; only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("boxmatch=info"));

        // Another subscriber may already be installed by the host application.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
