//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the Lexguard tracing/logging system.
///
/// Reads the `LEXGUARD_LOG` environment variable for per-crate log levels.
/// Format: `LEXGUARD_LOG=lexguard_dictionary=debug,lexguard_engine=info`
///
/// Falls back to `lexguard=info` if `LEXGUARD_LOG` is not set or is invalid.
/// Calling it more than once is a no-op; if the host already installed a
/// global subscriber, that one is kept.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("lexguard=info"));

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
    });
}
