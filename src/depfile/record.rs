//! Parsing of makefile dependency rules.
//!
//! Rules are handled as raw bytes: paths in `.d` files are whatever the
//! compiler saw on disk and need not be valid UTF-8.

/// A single logical dependency rule: `target: prereq1 prereq2 ...`.
///
/// # Examples
///
/// ```
/// use depfilter::depfile::parse_line;
///
/// let record = parse_line(b"foo.o: foo.c foo.h").unwrap();
/// assert_eq!(record.target, b"foo.o");
/// assert_eq!(record.prerequisites, [b"foo.c", b"foo.h"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRecord {
    /// Bytes before the first `:`, kept verbatim.
    pub target: Vec<u8>,
    /// Whitespace-separated paths after the first `:`, in input order.
    pub prerequisites: Vec<Vec<u8>>,
}

impl DependencyRecord {
    /// Replace the target with `destination/basename(target)`.
    ///
    /// The basename is everything after the last `/`. A trailing `/` on
    /// `destination` is not doubled.
    ///
    /// ```
    /// use depfilter::depfile::parse_line;
    ///
    /// let mut record = parse_line(b"/abs/path/foo.o: foo.c").unwrap();
    /// record.retarget(b"build/out");
    /// assert_eq!(record.target, b"build/out/foo.o");
    /// ```
    pub fn retarget(&mut self, destination: &[u8]) {
        let basename = self
            .target
            .rsplit(|&b| b == b'/')
            .next()
            .unwrap_or_default();
        let mut target = destination.to_vec();
        if !destination.ends_with(b"/") {
            target.push(b'/');
        }
        target.extend_from_slice(basename);
        self.target = target;
    }
}

/// Rules parsed from a whole input, plus the number of noise lines ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRecords {
    /// Rules in input order.
    pub records: Vec<DependencyRecord>,
    /// Logical lines without a `:` separator.
    pub skipped_lines: usize,
}

/// Whitespace as understood by makefile tokenizing: space, tab, newline,
/// carriage return, vertical tab, form feed.
const fn is_separator(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Fold backslash-newline continuations into single spaces so that every
/// rule occupies exactly one line.
#[must_use]
pub fn join_continuations(text: &[u8]) -> Vec<u8> {
    let mut joined = Vec::with_capacity(text.len());
    let mut rest = text;
    while let Some((&b, tail)) = rest.split_first() {
        if b == b'\\' && tail.first() == Some(&b'\n') {
            joined.push(b' ');
            rest = tail.get(1..).unwrap_or_default();
        } else {
            joined.push(b);
            rest = tail;
        }
    }
    joined
}

/// Parse one logical line into a [`DependencyRecord`].
///
/// Returns `None` for lines without a `:` separator (blank lines, stray
/// text); those are noise, not errors.
#[must_use]
pub fn parse_line(line: &[u8]) -> Option<DependencyRecord> {
    let colon = line.iter().position(|&b| b == b':')?;
    let (target, rest) = line.split_at(colon);
    let prerequisites = rest.get(1..).unwrap_or_default();
    Some(DependencyRecord {
        target: target.to_vec(),
        prerequisites: prerequisites
            .split(|&b| is_separator(b))
            .filter(|token| !token.is_empty())
            .map(<[u8]>::to_vec)
            .collect(),
    })
}

/// Parse every rule in `text`, joining continuations first.
///
/// ```
/// use depfilter::depfile::parse_records;
///
/// let parsed = parse_records(b"a.o: a.c \\\n a.h\n\nb.o: b.c\n");
/// assert_eq!(parsed.records.len(), 2);
/// assert_eq!(parsed.records[0].prerequisites, [b"a.c", b"a.h"]);
/// assert_eq!(parsed.skipped_lines, 2);
/// ```
#[must_use]
pub fn parse_records(text: &[u8]) -> ParsedRecords {
    let mut parsed = ParsedRecords::default();
    for line in join_continuations(text).split(|&b| b == b'\n') {
        match parse_line(line) {
            Some(record) => parsed.records.push(record),
            None => parsed.skipped_lines += 1,
        }
    }
    parsed
}
