//! Makefile dependency (`.d`) files: parse rules, filter prerequisites, and
//! render the result.
//!
//! - **[`record`](DependencyRecord)** — rule parsing and continuation joining
//! - **[`classify`](Classification)** — source/absolute/header split and header ordering
//! - **[`render`](render_record)** — continuation-formatted output

mod classify;
mod record;
mod render;

pub use classify::{
    Classification, FilteredPrerequisites, SOURCE_SUFFIX, classify, filter_prerequisites,
    header_order, path_depth,
};
pub use record::{DependencyRecord, ParsedRecords, join_continuations, parse_line, parse_records};
pub use render::{CONTINUATION, render_record};
