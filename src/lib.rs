//! Makefile dependency-file filter.
//!
//! Post-processes compiler-generated `.d` files: drops absolute-path
//! (system) headers, keeps `.c` sources first in input order, lists every
//! other header once sorted by path depth then name, and optionally moves
//! each target under a destination directory.
//!
//! The public API is organised into these layers:
//!
//! - **[`depfile`]** — parse, classify, and render dependency rules
//! - **[`filter`]** — whole-input batch processing and statistics
//! - **[`config`]** — the immutable settings threaded into the filter
//! - **[`cli`]** — command-line definition
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod config;
pub mod depfile;
pub mod error;
pub mod filter;
pub mod logging;
