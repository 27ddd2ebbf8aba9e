//! Tracing setup for the binary.
//!
//! Logs always go to stderr: stdout carries the JSON lines. `RUST_LOG`
//! overrides the level passed in.

use std::io::stderr;
use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install the global subscriber. Only the first call has any effect.
pub fn init_logging(log_level: &str) {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

        // try_init: a subscriber installed elsewhere (tests) is not an error here
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(stderr).with_target(false))
            .try_init();
    });
}
