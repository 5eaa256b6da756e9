use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Rendering of the analysis result on stdout.
#[derive(Debug, Clone, Copy, ValueEnum, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Key-ordered JSON dump
    Json,
    /// Human-readable report
    Pretty,
    /// No rendering; the result is only used programmatically
    Raw,
}

impl OutputFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Pretty => "pretty",
            Self::Raw => "raw",
        }
    }
}
