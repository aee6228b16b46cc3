//! Tracing subscriber setup
//!
//! `RUST_LOG` wins when set; otherwise `info`, or `debug` in verbose mode. Messages carry a bracketed subsystem tag
//! (`[GAME]`, `[AI]`, `[RULES]`, `[SETTINGS]`) so the target can be hidden.

use tracing_subscriber::EnvFilter;

/// Default filter directive
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Install the global subscriber; a second call is a no-op
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
