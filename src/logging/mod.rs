//! Diagnostic logging on stderr, built on [`tracing`].
//!
//! Standard output is reserved for filtered dependency text, so every event
//! is written to standard error.

mod logger;
mod subscriber;

pub use logger::Logger;
pub use subscriber::init_subscriber;

/// Environment variable holding a `tracing` filter directive that overrides
/// the `--verbose` level (e.g. `DEPFILTER_LOG=debug`).
pub const LOG_ENV: &str = "DEPFILTER_LOG";

/// Target used for stage header events.
pub(crate) const STAGE_TARGET: &str = "depfilter::stage";
