//! Configuration for path output

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::scale::DEFAULT_SCALE;

/// Serialized form of a subpath
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// `[{"pos": [x, y], "type": n}, ...]` with fixed decimals
    #[default]
    Json,
    /// `[[type, x, y], ...]`
    LegacyJson,
    /// One `type x y` line per vertex
    Text,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::LegacyJson => write!(f, "legacy-json"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "legacy-json" => Ok(OutputFormat::LegacyJson),
            "text" => Ok(OutputFormat::Text),
            other => Err(format!(
                "unknown output format '{}' (expected json, legacy-json or text)",
                other
            )),
        }
    }
}

/// Configuration options for path output
#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    /// Serialized form
    pub format: OutputFormat,

    /// Drawing-space size mapped onto the unit square
    pub scale: f64,

    /// Decimal places for `Json` output
    pub precision: usize,

    /// Whether to indent JSON output
    pub pretty: bool,

    /// Extension of written files (without the dot)
    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            scale: DEFAULT_SCALE,
            precision: 5,
            pretty: false,
            extension: "path".to_string(),
        }
    }
}

impl OutputConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the scale factor
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set the number of decimals for JSON output
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Set whether to pretty-print JSON output
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Set the output file extension
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }
}
