use clap::Parser;

use super::parsers::parse_bool_env;
use super::*;
use crate::error::{AppError, AppResult};
use crate::metrics::TimezonePolicy;

fn parse_test_args<I, T>(args: I) -> AppResult<AnalyzerArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    AnalyzerArgs::try_parse_from(args).map_err(AppError::from)
}

#[test]
fn parse_args_defaults() -> AppResult<()> {
    let args = parse_test_args(["apistat"])?;

    let checks = [
        (args.pattern == DEFAULT_PATTERN, "Unexpected default pattern"),
        (
            args.output_format == OutputFormat::Pretty,
            "Expected pretty output",
        ),
        (!args.charts, "Expected charts to be disabled"),
        (!args.ask_charts, "Expected ask_charts to be disabled"),
        (
            args.charts_path == default_charts_path(),
            "Unexpected charts path",
        ),
        (args.export_json.is_none(), "Expected no export path"),
        (
            args.timezone == TimezonePolicy::Local,
            "Expected local timezone",
        ),
        (args.config.is_none(), "Expected no config path"),
        (!args.verbose, "Expected verbose to be false"),
    ];
    for (ok, message) in checks {
        if !ok {
            return Err(AppError::config(message));
        }
    }
    Ok(())
}

#[test]
fn parse_args_full() -> AppResult<()> {
    let args = parse_test_args([
        "apistat",
        "logs/api_*.csv",
        "-o",
        "json",
        "--charts",
        "--charts-path",
        "out",
        "--export-json",
        "result.json",
        "--timezone",
        "utc",
        "-v",
    ])?;

    if args.pattern != "logs/api_*.csv" {
        return Err(AppError::config(format!("Unexpected pattern {}", args.pattern)));
    }
    if args.output_format != OutputFormat::Json || !args.charts || !args.verbose {
        return Err(AppError::config("Unexpected flags"));
    }
    if args.charts_path != "out" || args.export_json.as_deref() != Some("result.json") {
        return Err(AppError::config("Unexpected paths"));
    }
    if args.timezone != TimezonePolicy::Utc {
        return Err(AppError::config("Expected utc timezone"));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_unknown_format() -> AppResult<()> {
    match parse_test_args(["apistat", "-o", "yaml"]) {
        Err(AppError::Clap { .. }) => Ok(()),
        Err(err) => Err(AppError::config(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::config("Expected yaml to be rejected")),
    }
}

#[test]
fn charts_and_ask_charts_conflict() -> AppResult<()> {
    match parse_test_args(["apistat", "--charts", "--ask-charts"]) {
        Err(AppError::Clap { .. }) => Ok(()),
        Err(err) => Err(AppError::config(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::config("Expected flag conflict")),
    }
}

#[test]
fn parse_bool_env_values() -> AppResult<()> {
    for value in ["1", "true", "YES", " on "] {
        if parse_bool_env(value) != Ok(true) {
            return Err(AppError::config(format!("Expected {} to be true", value)));
        }
    }
    for value in ["0", "false", "off", ""] {
        if parse_bool_env(value) != Ok(false) {
            return Err(AppError::config(format!("Expected {} to be false", value)));
        }
    }
    if parse_bool_env("maybe").is_ok() {
        return Err(AppError::config("Expected maybe to be rejected"));
    }
    Ok(())
}
