//! Placeholder substitution.
//!
//! A key `foo` matches the literal placeholder `{FOO}`. Mappings are applied
//! one after another against the same growing buffer, so a value inserted by
//! an earlier key can contain a placeholder that a later key then replaces.

use std::sync::LazyLock;

use regex::Regex;

use crate::resolve::FlattenedMapping;

static LEFTOVER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^{}\s]+\}").expect("valid placeholder regex"));

/// The placeholder text that `key` is substituted for.
pub fn placeholder(key: &str) -> String {
    format!("{{{}}}", key.to_uppercase())
}

/// Substitute every mapping into `template`, in order.
///
/// Values are trimmed before insertion; the template itself is not.
/// Placeholders without a matching key are left as written.
pub fn render<'a, I>(template: &str, mappings: I) -> String
where
    I: IntoIterator<Item = &'a FlattenedMapping>,
{
    let mut text = template.to_string();

    for (index, mapping) in mappings.into_iter().enumerate() {
        let mut substituted = 0usize;
        for (key, value) in mapping {
            let marker = placeholder(key);
            if text.contains(&marker) {
                text = text.replace(&marker, value.trim());
                substituted += 1;
            }
        }
        tracing::trace!(mapping = index, keys = mapping.len(), substituted, "applied mapping");
    }

    text
}

/// Placeholder-shaped markers still present in `text`, in order of appearance.
pub fn unresolved_placeholders(text: &str) -> Vec<&str> {
    LEFTOVER.find_iter(text).map(|m| m.as_str()).collect()
}
