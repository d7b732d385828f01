//! `%(name)s` value interpolation.
//!
//! A reference is looked up in the value's own section first and then in
//! the Base Section. `%%` is an escaped percent sign. References that cannot
//! be resolved are kept verbatim rather than failing.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::{Captures, Regex};

use super::Section;
use crate::constants::{BASE_SECTION, MAX_INTERPOLATION_DEPTH};

static REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%%|%\(([^)]*)\)s").expect("valid interpolation regex")
});

/// Expand every value of every section against the raw document.
pub fn interpolate_sections(raw: &IndexMap<String, Section>) -> IndexMap<String, Section> {
    let empty = Section::new();
    let base = raw.get(BASE_SECTION).unwrap_or(&empty);

    raw.iter()
        .map(|(name, section)| {
            let expanded = section
                .iter()
                .map(|(key, value)| (key.clone(), expand(value, section, base, 1)))
                .collect();
            (name.clone(), expanded)
        })
        .collect()
}

fn expand(value: &str, section: &Section, base: &Section, depth: usize) -> String {
    if !value.contains('%') {
        return value.to_string();
    }
    if depth > MAX_INTERPOLATION_DEPTH {
        tracing::debug!(value, "interpolation depth exceeded; leaving value as-is");
        return value.to_string();
    }

    REFERENCE
        .replace_all(value, |caps: &Captures<'_>| {
            let Some(name) = caps.get(1) else {
                return "%".to_string();
            };
            let name = name.as_str().to_lowercase();
            match section.get(&name).or_else(|| base.get(&name)) {
                Some(referenced) => expand(referenced, section, base, depth + 1),
                None => {
                    tracing::debug!(reference = %name, "unresolved interpolation reference");
                    caps[0].to_string()
                }
            }
        })
        .into_owned()
}
