//! Hierarchical section resolution.
//!
//! A dash-separated name such as `widget-button-icon` inherits from
//! `widget-button`, then `widget`, then the Base Section. [`resolve`] merges
//! that chain root to leaf into one [`FlattenedMapping`]:
//!
//! - plain keys override whatever the ancestors set,
//! - `+key` entries append onto the value accumulated so far and are
//!   dropped from the result.

pub mod ancestry;

use indexmap::IndexMap;

pub use ancestry::{ancestry, parent};

use crate::config::{Document, Section};
use crate::constants::{APPEND_PREFIX, BASE_SECTION};

/// Fully merged, append-resolved key/value pairs for one section name.
pub type FlattenedMapping = IndexMap<String, String>;

/// Compute the flattened mapping that applies to `name`.
///
/// Missing sections contribute nothing and missing append targets count as
/// empty strings, so this never fails. The empty name resolves the Base
/// Section alone.
pub fn resolve(document: &Document, name: &str) -> FlattenedMapping {
    let mut merged = FlattenedMapping::new();

    let levels = std::iter::once(BASE_SECTION).chain(ancestry(name));
    for level in levels {
        let Some(section) = document.section(level) else {
            tracing::trace!(section = level, "no literal section; inheriting unchanged");
            continue;
        };
        merge_level(&mut merged, section);
        tracing::debug!(
            section = level,
            entries = section.len(),
            keys = merged.len(),
            "merged section"
        );
    }

    merged
}

/// Merge one level's literal entries into the accumulated mapping.
///
/// All plain keys land first; append keys then run in document order, each
/// against the value visible after the plain keys of this level.
pub fn merge_level(merged: &mut FlattenedMapping, section: &Section) {
    for (key, value) in section {
        if !key.starts_with(APPEND_PREFIX) {
            merged.insert(key.clone(), value.clone());
        }
    }

    for (key, value) in section {
        if let Some(target) = key.strip_prefix(APPEND_PREFIX) {
            merged.entry(target.to_string()).or_default().push_str(value);
        }
    }
}
