use serde::Deserialize;

use crate::args::OutputFormat;
use crate::metrics::TimezonePolicy;

/// Options accepted from `apistat.toml` / `apistat.json`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub pattern: Option<String>,
    pub output_format: Option<OutputFormat>,
    pub charts: Option<bool>,
    pub ask_charts: Option<bool>,
    pub charts_path: Option<String>,
    pub export_json: Option<String>,
    pub timezone: Option<TimezonePolicy>,
}
