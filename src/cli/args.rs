//! Clap argument types.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use genspec::config::ParseOptions;
use genspec::constants::ENV_LOG;

/// Render a module's specification text from a template and INI configuration.
#[derive(Parser, Debug)]
#[command(name = genspec::constants::APP_NAME, version = genspec::constants::VERSION)]
pub struct Cli {
    /// Template file containing `{KEY}` placeholders.
    pub template: PathBuf,

    /// Hierarchical spec configuration (INI with dash-named sections).
    pub spec_ini: PathBuf,

    /// Program configuration; only its [DEFAULT] section is used.
    pub pgm_ini: PathBuf,

    /// Module name, e.g. `widget-button`.
    #[arg(allow_hyphen_values = true)]
    pub name: String,

    /// Keep `%(name)s` references and `%%` escapes verbatim.
    #[arg(long, default_value_t = false)]
    pub raw: bool,

    /// Output format.
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Log filter written to stderr (e.g. `debug`, `genspec=trace`).
    #[arg(long, env = ENV_LOG, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Parse options for both configuration documents.
    pub fn parse_options(&self) -> ParseOptions {
        if self.raw {
            ParseOptions::raw()
        } else {
            ParseOptions::default()
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// The rendered template.
    Text,
    /// The module's resolved spec mapping as JSON, without rendering.
    Json,
}
