//! Whole-batch dependency filtering: read everything, rewrite every rule,
//! write everything.
//!
//! Input is processed as raw bytes, so paths in any encoding pass through
//! unchanged.
use std::io::{Read, Write};

use crate::cli::Cli;
use crate::config::FilterConfig;
use crate::depfile::{self, DependencyRecord};
use crate::error::StreamError;
use crate::logging::Logger;

/// Counters collected while filtering one input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Rules parsed and emitted.
    pub rules: usize,
    /// Logical lines without a `:` that were ignored.
    pub skipped_lines: usize,
    /// Absolute-path prerequisites removed.
    pub absolute_dropped: usize,
    /// Repeated header prerequisites collapsed.
    pub duplicates_dropped: usize,
}

/// Apply the filter rules to one record: optional retarget, then
/// sources-then-sorted-headers with absolute paths removed.
#[must_use]
pub fn filter_record(
    mut record: DependencyRecord,
    config: &FilterConfig,
    stats: &mut FilterStats,
) -> DependencyRecord {
    if let Some(destination) = config.destination() {
        record.retarget(destination.as_bytes());
    }

    let filtered = depfile::filter_prerequisites(&record.prerequisites);
    stats.absolute_dropped += filtered.absolute_dropped;
    stats.duplicates_dropped += filtered.duplicates_dropped;
    record.prerequisites = filtered.into_paths();
    record
}

/// Filter a complete dependency text and return the rewritten text.
///
/// ```
/// use depfilter::config::FilterConfig;
/// use depfilter::filter::filter_text;
///
/// let (out, stats) = filter_text(
///     b"a.o: a.c /usr/include/stdio.h b.h a/c.h a.h\n",
///     &FilterConfig::default(),
/// );
/// assert_eq!(out, b"a.o: a.c \\\n  a.h \\\n  b.h \\\n  a/c.h\n\n");
/// assert_eq!(stats.rules, 1);
/// ```
#[must_use]
pub fn filter_text(input: &[u8], config: &FilterConfig) -> (Vec<u8>, FilterStats) {
    let parsed = depfile::parse_records(input);
    let mut stats = FilterStats {
        skipped_lines: parsed.skipped_lines,
        ..FilterStats::default()
    };
    let mut output = Vec::with_capacity(input.len());

    for record in parsed.records {
        let record = filter_record(record, config, &mut stats);
        output.extend(depfile::render_record(&record));
        stats.rules += 1;
    }

    (output, stats)
}

/// Read all of `input`, filter it, and write the result to `output`.
///
/// Nothing is written until the whole input has been read.
///
/// # Errors
///
/// Returns a [`StreamError`] if reading or writing fails.
pub fn run<R: Read, W: Write>(
    mut input: R,
    mut output: W,
    config: &FilterConfig,
    log: &Logger,
) -> Result<FilterStats, StreamError> {
    log.stage("Reading dependency rules");
    let mut text = Vec::new();
    input.read_to_end(&mut text).map_err(StreamError::Read)?;
    log.debug(&format!("read {} bytes", text.len()));

    if let Some(destination) = config.destination() {
        log.debug(&format!("rewriting targets under {destination}"));
    }

    log.stage("Filtering");
    let (filtered, stats) = filter_text(&text, config);

    if stats.rules == 0 && !text.trim_ascii().is_empty() {
        log.warn("input contains no dependency rules");
    }
    log.info(&format!("{} rules", stats.rules));
    log.debug(&format!("{} lines skipped", stats.skipped_lines));
    log.debug(&format!(
        "{} absolute paths dropped",
        stats.absolute_dropped
    ));
    log.debug(&format!(
        "{} duplicate headers collapsed",
        stats.duplicates_dropped
    ));

    output
        .write_all(&filtered)
        .and_then(|()| output.flush())
        .map_err(StreamError::Write)?;

    log.debug(&format!("done in {:.2?}", log.elapsed()));
    Ok(stats)
}

/// Turn `cli` into a [`FilterConfig`] and [`run`] the filter.
///
/// # Errors
///
/// Returns a [`StreamError`] if reading or writing fails.
pub fn run_cli<R: Read, W: Write>(
    cli: &Cli,
    input: R,
    output: W,
    log: &Logger,
) -> Result<FilterStats, StreamError> {
    run(input, output, &FilterConfig::from_cli(cli), log)
}
