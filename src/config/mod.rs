//! Configuration documents.
//!
//! A [`Document`] is an ordered set of named sections, each an ordered
//! key/value map. The `[DEFAULT]` section is the Base Section. Documents are
//! immutable once parsed; the resolver only ever borrows them.

mod interpolate;
pub mod parser;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

use crate::constants::BASE_SECTION;
pub use parser::{ParseError, ParseErrorKind};

/// Ordered key/value entries of one section.
pub type Section = IndexMap<String, String>;

/// Errors while loading a document from disk.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    ParseFile { path: PathBuf, source: ParseError },
}

/// How document text is turned into values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Expand `%(name)s` references and `%%` escapes.
    pub interpolation: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            interpolation: true,
        }
    }
}

impl ParseOptions {
    /// Options that keep every value exactly as written.
    pub fn raw() -> Self {
        Self {
            interpolation: false,
        }
    }
}

/// A parsed configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    sections: IndexMap<String, Section>,
}

impl Document {
    /// An empty document (no sections, not even a Base Section).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse document text.
    pub fn parse(text: &str, options: ParseOptions) -> Result<Self, ParseError> {
        let raw = parser::parse_sections(text)?;
        let sections = if options.interpolation {
            interpolate::interpolate_sections(&raw)
        } else {
            raw
        };
        Ok(Self { sections })
    }

    /// Read and parse a document from a file.
    pub fn load(path: &Path, options: ParseOptions) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let document = Self::parse(&content, options).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::debug!(
            path = %path.display(),
            sections = document.sections.len(),
            "loaded configuration document"
        );
        Ok(document)
    }

    /// Like [`Document::load`], but a file that does not exist reads as an
    /// empty document.
    pub fn load_optional(path: &Path, options: ParseOptions) -> Result<Self, ConfigError> {
        match Self::load(path, options) {
            Err(ConfigError::ReadFile { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                tracing::warn!(path = %path.display(), "config file not found; using empty document");
                Ok(Self::new())
            }
            other => other,
        }
    }

    /// Set `key = value` in `section`, creating the section if needed.
    ///
    /// Values are stored exactly as given: no trimming, no interpolation.
    pub fn insert(
        &mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.sections
            .entry(section.into())
            .or_default()
            .insert(key.into(), value.into());
        self
    }

    /// Literal entries of the section named exactly `name`, if present.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Literal entries of `name`, or an empty section when absent.
    pub fn entries(&self, name: &str) -> Section {
        self.section(name).cloned().unwrap_or_default()
    }

    /// The Base Section's entries (empty when the document has none).
    pub fn base(&self) -> Section {
        self.entries(BASE_SECTION)
    }

    /// Whether a section named exactly `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Section names in document order, Base Section included.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }
}

impl std::str::FromStr for Document {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, ParseOptions::default())
    }
}
