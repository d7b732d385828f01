//! genspec — per-module specification generator (library crate).
//!
//! Resolves a module's values from a hierarchical INI document and
//! substitutes them into template text. Re-exports public modules for
//! integration tests and external use.

pub mod config;
pub mod constants;
pub mod generate;
pub mod resolve;
pub mod template;
