//! Conversion settings
//!
//! `ConvertConfig` is built in code with the `with_*` methods, or loaded
//! from a TOML settings file where every key is optional:
//!
//! ```toml
//! segmentation = "per-close"
//! input = "svg"
//!
//! [output]
//! format = "legacy-json"
//! scale = 1000.0
//! precision = 5
//! pretty = false
//! extension = "path"
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::normalizer::SegmentationMode;
use crate::output::{OutputConfig, OutputFormat};

/// Errors that can occur when loading or validating settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse settings TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// How an input file is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputKind {
    /// `.svg` files are drawings, everything else is record text
    #[default]
    Auto,
    /// SVG drawing
    Svg,
    /// `<type> <x> <y>` record text
    Records,
}

impl InputKind {
    /// Resolve `Auto` from the file extension
    pub fn resolve(self, path: &Path) -> InputKind {
        match self {
            InputKind::Auto => {
                let is_svg = path
                    .extension()
                    .map_or(false, |ext| ext.eq_ignore_ascii_case("svg"));
                if is_svg {
                    InputKind::Svg
                } else {
                    InputKind::Records
                }
            }
            other => other,
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Auto => write!(f, "auto"),
            InputKind::Svg => write!(f, "svg"),
            InputKind::Records => write!(f, "records"),
        }
    }
}

impl FromStr for InputKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(InputKind::Auto),
            "svg" => Ok(InputKind::Svg),
            "records" => Ok(InputKind::Records),
            other => Err(format!(
                "unknown input kind '{}' (expected auto, svg or records)",
                other
            )),
        }
    }
}

/// Configuration for the complete conversion pipeline
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConvertConfig {
    /// How SVG path commands are split into subpaths
    pub segmentation: SegmentationMode,
    /// How input files are interpreted
    pub input: InputKind,
    /// Output configuration
    pub output: OutputConfig,
}

/// TOML structure for deserializing settings
#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct TomlSettings {
    segmentation: Option<SegmentationMode>,
    input: Option<InputKind>,
    output: TomlOutput,
}

#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct TomlOutput {
    format: Option<OutputFormat>,
    scale: Option<f64>,
    precision: Option<usize>,
    pretty: Option<bool>,
    extension: Option<String>,
}

/// Largest decimal count that still means something for an f64
const MAX_PRECISION: usize = 15;

impl ConvertConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the segmentation mode
    pub fn with_segmentation(mut self, mode: SegmentationMode) -> Self {
        self.segmentation = mode;
        self
    }

    /// Set how input files are interpreted
    pub fn with_input(mut self, input: InputKind) -> Self {
        self.input = input;
        self
    }

    /// Set the output configuration
    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load settings from a TOML string; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        let parsed: TomlSettings = toml::from_str(content)?;
        let defaults = OutputConfig::default();

        let config = ConvertConfig {
            segmentation: parsed.segmentation.unwrap_or_default(),
            input: parsed.input.unwrap_or_default(),
            output: OutputConfig {
                format: parsed.output.format.unwrap_or(defaults.format),
                scale: parsed.output.scale.unwrap_or(defaults.scale),
                precision: parsed.output.precision.unwrap_or(defaults.precision),
                pretty: parsed.output.pretty.unwrap_or(defaults.pretty),
                extension: parsed.output.extension.unwrap_or(defaults.extension),
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Check values that would produce meaningless output
    pub fn validate(&self) -> Result<(), SettingsError> {
        let scale = self.output.scale;
        if !scale.is_finite() || scale == 0.0 {
            return Err(SettingsError::Invalid(format!(
                "scale must be finite and non-zero, got {}",
                scale
            )));
        }
        if self.output.precision > MAX_PRECISION {
            return Err(SettingsError::Invalid(format!(
                "precision must be at most {}, got {}",
                MAX_PRECISION, self.output.precision
            )));
        }
        if self.output.extension.is_empty() || self.output.extension.contains(['/', '\\']) {
            return Err(SettingsError::Invalid(format!(
                "extension '{}' is not a valid file extension",
                self.output.extension
            )));
        }
        Ok(())
    }
}
