//! Immutable filter configuration built from command-line arguments.
use crate::cli::Cli;

/// Settings threaded into [`filter::run`](crate::filter::run).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    destination: Option<String>,
}

impl FilterConfig {
    /// Build a configuration with an optional destination directory.
    ///
    /// An empty destination means "no destination": targets pass through
    /// unchanged.
    #[must_use]
    pub fn new(destination: Option<String>) -> Self {
        Self {
            destination: destination.filter(|dest| !dest.is_empty()),
        }
    }

    /// Build a configuration from parsed arguments.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new(cli.dest.clone())
    }

    /// Directory that rewritten targets are placed under, if any.
    #[must_use]
    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }
}
