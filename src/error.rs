//! Domain-specific error types for the dependency filter.
//!
//! The filter itself cannot fail on any input; only the streams around it
//! can. [`StreamError`] is converted to [`anyhow::Error`] at the `main`
//! boundary via the standard `?` operator.

use thiserror::Error;

/// Errors raised while reading dependency text or writing the result.
#[derive(Error, Debug)]
pub enum StreamError {
    /// Reading the input failed.
    #[error("failed to read input: {0}")]
    Read(#[source] std::io::Error),

    /// Writing the output failed.
    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),
}
