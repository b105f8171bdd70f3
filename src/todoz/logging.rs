//! Diagnostic logging.
//!
//! Logs go to stderr through `tracing-subscriber`, never to stdout, so they
//! can't corrupt command output. The filter comes from `TODOZ_LOG` (same
//! syntax as `RUST_LOG`); without it, `warn` is the floor, or `debug` for
//! this crate when the user asked for verbose output.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV_VAR: &str = "TODOZ_LOG";

pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "warn,todoz=debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
