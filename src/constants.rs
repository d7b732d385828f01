//! App-wide constants.
//!
//! Centralises the tool name, reserved section and key names, and
//! environment variable names so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "genspec";

/// Crate version, as reported by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reserved name of the Base Section inherited by every other section.
pub const BASE_SECTION: &str = "DEFAULT";

/// Separator between segments of a hierarchical section name.
pub const SEGMENT_SEPARATOR: char = '-';

/// Prefix marking an append key (`+key = value`).
pub const APPEND_PREFIX: char = '+';

/// Synthetic key carrying the uppercased module name into templates.
pub const MODULE_KEY: &str = "module";

/// Prefix of a full-line comment in configuration documents.
pub const COMMENT_PREFIX: char = ';';

/// Maximum nesting depth for `%(name)s` interpolation.
pub const MAX_INTERPOLATION_DEPTH: usize = 10;

// ── Environment variable names ──────────────────────────────────────

/// Log filter (`tracing_subscriber::EnvFilter` syntax).
pub const ENV_LOG: &str = "GENSPEC_LOG";
