use std::io;

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset or unparsable
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Install the global fmt subscriber
///
/// Logs go to stderr so they never interleave with the interactive transcript
/// on stdout. Calling this twice is harmless; the second call is ignored.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
