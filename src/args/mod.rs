//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod tests;

pub use cli::AnalyzerArgs;
pub use types::OutputFormat;

pub(crate) use defaults::{DEFAULT_PATTERN, default_charts_path};
