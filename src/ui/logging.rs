//! Diagnostic output
//!
//! Core modules emit through the `tracing` macros; this installs the
//! subscriber that prints them as `LEVEL message` lines on stderr.

use tracing::Level;

/// Max level for the given verbosity
pub fn max_level(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { Level::INFO }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(max_level(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_ansi(console::colors_enabled_stderr())
        .try_init();
}
