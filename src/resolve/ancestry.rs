//! Section-name hierarchy.

use crate::constants::SEGMENT_SEPARATOR;

/// Names of the sections `name` inherits from, root first, `name` last.
///
/// Every non-empty prefix made of whole dash-segments is one level, so
/// `a-b-c` yields `a`, `a-b`, `a-b-c`. The Base Section is implied and not
/// listed; an empty name yields no levels.
pub fn ancestry(name: &str) -> Vec<&str> {
    if name.is_empty() {
        return Vec::new();
    }

    name.match_indices(SEGMENT_SEPARATOR)
        .map(|(idx, _)| &name[..idx])
        .chain(std::iter::once(name))
        .filter(|prefix| !prefix.is_empty())
        .collect()
}

/// The parent of `name`: its last dash-segment dropped.
///
/// A single-segment name has the empty name (the Base Section) as parent.
pub fn parent(name: &str) -> &str {
    match name.rfind(SEGMENT_SEPARATOR) {
        Some(idx) => &name[..idx],
        None => "",
    }
}
