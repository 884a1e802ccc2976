//! Prerequisite classification and header ordering.
use std::cmp::Ordering;
use std::collections::HashSet;

/// Suffix identifying translation units.
pub const SOURCE_SUFFIX: &[u8] = b".c";

/// How a prerequisite path is treated by the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// A `.c` file: kept in input order, duplicates included.
    Source,
    /// An absolute path (system header): dropped.
    Absolute,
    /// Anything else: deduplicated and sorted.
    Header,
}

/// Classify a single prerequisite.
///
/// The source suffix is checked before the absolute marker, so `/src/x.c`
/// is a [`Classification::Source`].
#[must_use]
pub fn classify(path: &[u8]) -> Classification {
    if path.ends_with(SOURCE_SUFFIX) {
        Classification::Source
    } else if path.starts_with(b"/") {
        Classification::Absolute
    } else {
        Classification::Header
    }
}

/// Number of `/` separators in `path`.
#[must_use]
pub fn path_depth(path: &[u8]) -> usize {
    path.iter().filter(|&&b| b == b'/').count()
}

/// Header comparator: shallower paths first, then byte-wise lexical order.
///
/// ```
/// use std::cmp::Ordering;
/// use depfilter::depfile::header_order;
///
/// assert_eq!(header_order(b"z.h", b"a/b.h"), Ordering::Less);
/// assert_eq!(header_order(b"b.h", b"a.h"), Ordering::Greater);
/// ```
#[must_use]
pub fn header_order(a: &[u8], b: &[u8]) -> Ordering {
    path_depth(a).cmp(&path_depth(b)).then_with(|| a.cmp(b))
}

/// Result of filtering one prerequisite list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredPrerequisites {
    /// Source paths in their original order.
    pub sources: Vec<Vec<u8>>,
    /// Unique header paths sorted by [`header_order`].
    pub headers: Vec<Vec<u8>>,
    /// Count of absolute paths that were discarded.
    pub absolute_dropped: usize,
    /// Count of repeated header paths that were collapsed.
    pub duplicates_dropped: usize,
}

impl FilteredPrerequisites {
    /// Sources followed by headers, the order in which they are emitted.
    #[must_use]
    pub fn into_paths(self) -> Vec<Vec<u8>> {
        let mut paths = self.sources;
        paths.extend(self.headers);
        paths
    }
}

/// Split `prerequisites` into kept sources and sorted unique headers,
/// discarding absolute paths.
#[must_use]
pub fn filter_prerequisites<S: AsRef<[u8]>>(prerequisites: &[S]) -> FilteredPrerequisites {
    let mut filtered = FilteredPrerequisites::default();
    let mut seen: HashSet<&[u8]> = HashSet::new();

    for dep in prerequisites {
        let dep = dep.as_ref();
        match classify(dep) {
            Classification::Source => filtered.sources.push(dep.to_vec()),
            Classification::Absolute => filtered.absolute_dropped += 1,
            Classification::Header => {
                if seen.insert(dep) {
                    filtered.headers.push(dep.to_vec());
                } else {
                    filtered.duplicates_dropped += 1;
                }
            }
        }
    }

    filtered.headers.sort_by(|a, b| header_order(a, b));
    filtered
}
