//! Line-oriented INI parser.
//!
//! Accepts the dialect the spec documents are written in:
//!
//! ```ini
//! ; full-line comments start with a semicolon
//! [DEFAULT]
//! greeting = Hello
//! body: first line
//!     continued on an indented line
//!
//! [widget-button]
//! +greeting = , button
//! ```
//!
//! Keys are lowercased, values are trimmed, and indented lines continue the
//! previous value. No interpolation happens here; see [`super::interpolate`].

use indexmap::IndexMap;
use thiserror::Error;

use super::Section;
use crate::constants::{BASE_SECTION, COMMENT_PREFIX};

/// A syntax error in a configuration document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    /// 1-based line number of the offending line.
    pub line: usize,
    pub kind: ParseErrorKind,
}

/// What went wrong on the offending line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("key/value line before any [section] header")]
    MissingSectionHeader,

    #[error("expected `key = value` or `key: value`, got {0:?}")]
    MissingDelimiter(String),

    #[error("empty key before delimiter")]
    EmptyKey,

    #[error("section [{0}] already defined")]
    DuplicateSection(String),

    #[error("key {key:?} already defined in section [{section}]")]
    DuplicateKey { section: String, key: String },
}

/// Value being accumulated across continuation lines.
struct Pending {
    section: String,
    key: String,
    lines: Vec<String>,
}

impl Pending {
    fn finish(self, sections: &mut IndexMap<String, Section>) {
        let value = self.lines.join("\n").trim_end().to_string();
        if let Some(section) = sections.get_mut(&self.section) {
            section.insert(self.key, value);
        }
    }
}

/// Parse INI text into raw (uninterpolated) sections, in document order.
///
/// The Base Section may be reopened by a later `[DEFAULT]` header; any
/// other repeated header is an error, as is a key repeated within a section.
pub fn parse_sections(text: &str) -> Result<IndexMap<String, Section>, ParseError> {
    let mut sections: IndexMap<String, Section> = IndexMap::new();
    let mut current: Option<String> = None;
    let mut pending: Option<Pending> = None;
    // Indent of the line that opened the current key; deeper lines continue it.
    let mut key_indent = 0usize;

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let value = raw.trim();

        if value.starts_with(COMMENT_PREFIX) {
            continue;
        }

        if value.is_empty() {
            if let Some(p) = pending.as_mut() {
                p.lines.push(String::new());
            }
            continue;
        }

        let indent = raw.len() - raw.trim_start().len();
        if let Some(p) = pending.as_mut() {
            if indent > key_indent {
                p.lines.push(value.to_string());
                continue;
            }
        }

        // Anything below starts a new header or key line.
        if let Some(p) = pending.take() {
            p.finish(&mut sections);
        }
        key_indent = indent;

        if let Some(name) = section_header(value) {
            if sections.contains_key(name) && name != BASE_SECTION {
                return Err(ParseError {
                    line,
                    kind: ParseErrorKind::DuplicateSection(name.to_string()),
                });
            }
            sections.entry(name.to_string()).or_default();
            current = Some(name.to_string());
            continue;
        }

        let Some(section) = current.as_ref() else {
            return Err(ParseError {
                line,
                kind: ParseErrorKind::MissingSectionHeader,
            });
        };

        let Some(split) = value.find(['=', ':']) else {
            return Err(ParseError {
                line,
                kind: ParseErrorKind::MissingDelimiter(value.to_string()),
            });
        };

        let key = value[..split].trim_end().to_lowercase();
        if key.is_empty() {
            return Err(ParseError {
                line,
                kind: ParseErrorKind::EmptyKey,
            });
        }
        if sections
            .get(section)
            .is_some_and(|entries| entries.contains_key(&key))
        {
            return Err(ParseError {
                line,
                kind: ParseErrorKind::DuplicateKey {
                    section: section.clone(),
                    key,
                },
            });
        }

        pending = Some(Pending {
            section: section.clone(),
            key,
            lines: vec![value[split + 1..].trim().to_string()],
        });
    }

    if let Some(p) = pending.take() {
        p.finish(&mut sections);
    }

    Ok(sections)
}

/// Extract the name from a `[name]` header line, if it is one.
///
/// The name runs up to the last `]` and is not trimmed.
fn section_header(value: &str) -> Option<&str> {
    let rest = value.strip_prefix('[')?;
    let end = rest.rfind(']')?;
    if end == 0 {
        return None;
    }
    Some(&rest[..end])
}
