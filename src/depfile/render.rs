//! Rendering of filtered rules back into makefile syntax.
use super::record::DependencyRecord;

/// Separator placed between prerequisites: backslash, newline, two-space indent.
pub const CONTINUATION: &[u8] = b" \\\n  ";

/// Render `record` as `target: a \` / `  b` followed by a blank line.
///
/// ```
/// use depfilter::depfile::{DependencyRecord, render_record};
///
/// let record = DependencyRecord {
///     target: b"a.o".to_vec(),
///     prerequisites: vec![b"a.c".to_vec(), b"a.h".to_vec()],
/// };
/// assert_eq!(render_record(&record), b"a.o: a.c \\\n  a.h\n\n");
/// ```
#[must_use]
pub fn render_record(record: &DependencyRecord) -> Vec<u8> {
    let mut out = record.target.clone();
    out.extend_from_slice(b": ");
    out.extend(record.prerequisites.join(CONTINUATION));
    out.extend_from_slice(b"\n\n");
    out
}
