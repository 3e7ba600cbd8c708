//! Diagnostic logging setup.

use std::io;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "PORTAL_SETUP_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install a stderr subscriber filtered by `PORTAL_SETUP_LOG` (default `warn`).
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .try_init();
}
