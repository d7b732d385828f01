//! CLI command definitions and logging setup.
//!
//! Uses clap derive macros for argument definitions.

pub mod args;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber for the given filter directive.
pub fn init_tracing(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter)
        .with_context(|| format!("invalid log filter {filter:?}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}
