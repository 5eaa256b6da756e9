use clap::Parser;

use crate::metrics::TimezonePolicy;

use super::defaults::{DEFAULT_PATTERN, default_charts_path};
use super::parsers::parse_bool_env;
use super::types::OutputFormat;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "API request log analyzer - success rates and latency percentiles over calendar and rolling windows, with an optional dashboard chart."
)]
pub struct AnalyzerArgs {
    /// Glob pattern selecting the log files (e.g. "logs/*.csv")
    #[arg(default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// How to render the analysis result
    #[arg(
        long = "output-format",
        short = 'o',
        value_enum,
        default_value_t = OutputFormat::Pretty,
        help_heading = "Output Options"
    )]
    pub output_format: OutputFormat,

    /// Also render the dashboard chart
    #[arg(long, help_heading = "Output Options")]
    pub charts: bool,

    /// Ask before rendering the dashboard chart
    #[arg(long = "ask-charts", conflicts_with = "charts", help_heading = "Output Options")]
    pub ask_charts: bool,

    /// Directory the dashboard chart is written to
    #[arg(long = "charts-path", default_value_t = default_charts_path(), help_heading = "Output Options")]
    pub charts_path: String,

    /// Also write the structured result to this file
    #[arg(long = "export-json", help_heading = "Output Options")]
    pub export_json: Option<String>,

    /// Zone for calendar windows, naive log timestamps and rendered times
    #[arg(long, value_enum, default_value_t = TimezonePolicy::Local)]
    pub timezone: TimezonePolicy,

    /// Path to config file (TOML/JSON). Defaults to ./apistat.toml or ./apistat.json if present.
    #[arg(long, short = 'c', help_heading = "Common Options")]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by APISTAT_LOG/RUST_LOG)
    #[arg(long, short = 'v', alias = "debug", help_heading = "Common Options")]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env, help_heading = "Common Options")]
    pub no_color: bool,
}
