//! Terminal presentation layer
//!
//! - [`display`]: pack listings on stdout, styled with `console`
//! - [`progress`]: download progress bars using `indicatif`
//! - [`logging`]: the `tracing` subscriber that carries all diagnostics to stderr

pub mod display;
pub mod logging;
pub mod progress;
