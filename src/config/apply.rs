use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::AnalyzerArgs;
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments.
///
/// Values given explicitly on the command line win over the config file.
///
/// # Errors
///
/// Returns an error when a config value is invalid.
pub fn apply_config(
    args: &mut AnalyzerArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "pattern")
        && let Some(pattern) = config.pattern.as_deref()
    {
        if pattern.trim().is_empty() {
            return Err(AppError::config(ConfigError::EmptyPattern));
        }
        pattern.clone_into(&mut args.pattern);
    }

    if !is_cli(matches, "output_format")
        && let Some(format) = config.output_format
    {
        args.output_format = format;
    }

    if !is_cli(matches, "charts")
        && let Some(charts) = config.charts
    {
        args.charts = charts;
    }

    if !is_cli(matches, "ask_charts")
        && let Some(ask_charts) = config.ask_charts
    {
        args.ask_charts = ask_charts;
    }

    if !is_cli(matches, "charts_path")
        && let Some(path) = config.charts_path.as_deref()
    {
        path.clone_into(&mut args.charts_path);
    }

    if !is_cli(matches, "export_json")
        && let Some(path) = config.export_json.clone()
    {
        args.export_json = Some(path);
    }

    if !is_cli(matches, "timezone")
        && let Some(timezone) = config.timezone
    {
        args.timezone = timezone;
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}
