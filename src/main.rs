//! genspec — per-module specification generator.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::io::Write;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use cli::args::{Cli, OutputFormat};
use genspec::config::Document;
use genspec::{generate, resolve};

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "Error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    cli::init_tracing(&cli.log_level)?;

    let options = cli.parse_options();
    let template = std::fs::read_to_string(&cli.template)
        .with_context(|| format!("failed to read template {}", cli.template.display()))?;
    let spec = Document::load_optional(&cli.spec_ini, options)
        .context("failed to load spec configuration")?;
    let program = Document::load_optional(&cli.pgm_ini, options)
        .context("failed to load program configuration")?;

    let output = match cli.format {
        OutputFormat::Text => generate::generate(&template, &spec, &program, &cli.name),
        OutputFormat::Json => {
            let resolved = resolve::resolve(&spec, &cli.name);
            serde_json::to_string_pretty(&resolved).context("failed to serialize mapping")?
        }
    };

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{output}").context("failed to write output")?;
    handle.flush().context("failed to write output")?;
    Ok(())
}
