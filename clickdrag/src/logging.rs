//! Logging infrastructure for the clickdrag tools.
//!
//! Console logging via `tracing`:
//! - Defaults to the `info` level
//! - Configurable via the RUST_LOG environment variable
//!
//! This is a one-shot batch tool, so there is no log file; everything a
//! run skips or writes is reported on the console.

use tracing_subscriber::EnvFilter;

/// Initialize the logging system.
///
/// Call once, before any fetch or combine work starts. Subsequent calls
/// are ignored so tests can set up logging independently.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}
