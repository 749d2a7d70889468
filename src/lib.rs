//! vecpath - convert vector paths into unit-space vertex lists
//!
//! Reads SVG drawings (absolute `M`, `C`, `Q` and `Z` commands) or plain
//! `<type> <x> <y>` record text and writes one JSON vertex list per
//! subpath, with coordinates mapped into a unit square with inverted Y.
//!
//! # Example
//!
//! ```rust
//! use vecpath::{convert_svg, encode_document, ConvertConfig};
//!
//! let config = ConvertConfig::default();
//! let doc = convert_svg(r#"<svg><path d="M0 0 Q500 0 500 500"/></svg>"#, &config).unwrap();
//! let encoded = encode_document(&doc, &config.output).unwrap();
//! assert_eq!(
//!     encoded[0],
//!     r#"[{"pos":[0.00000,1.00000],"type":1},{"pos":[0.50000,1.00000],"type":2},{"pos":[0.50000,0.50000],"type":1}]"#
//! );
//! ```

pub mod config;
pub mod drawing;
pub mod error;
pub mod normalizer;
pub mod output;
pub mod parser;

pub use config::{ConvertConfig, InputKind, SettingsError};
pub use drawing::{Drawing, DrawingError};
pub use error::ParseError;
pub use normalizer::{
    normalize, Document, DrawCommand, NormalizeError, PathNormalizer, Point, SegmentationMode,
    Subpath, Vertex, VertexKind,
};
pub use output::{OutputConfig, OutputFormat};

use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use thiserror::Error;

/// Errors that can occur during conversion
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Record text did not parse
    #[error("record errors: {}", format_parse_errors(.0))]
    Records(Vec<ParseError>),

    /// The SVG drawing could not be read
    #[error("{0}")]
    Drawing(#[from] DrawingError),

    /// A path used an unsupported command
    #[error("{0}")]
    Normalize(#[from] NormalizeError),

    /// Output could not be serialized
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),

    /// A file could not be read or written
    #[error("failed to access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl From<Vec<ParseError>> for ConvertError {
    fn from(errors: Vec<ParseError>) -> Self {
        ConvertError::Records(errors)
    }
}

fn format_parse_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convert SVG source into a document
///
/// Every path element is normalized on its own, in document order, and
/// the resulting subpaths are concatenated.
pub fn convert_svg(source: &str, config: &ConvertConfig) -> Result<Document, ConvertError> {
    let drawing = Drawing::parse(source)?;
    let normalizer = PathNormalizer::new(config.segmentation);

    let mut document = Document::new();
    for path in drawing.paths() {
        let converted = normalizer.normalize(&path.commands)?;
        debug!(
            "path {} -> {} subpath(s)",
            path.id.as_deref().unwrap_or("<anon>"),
            converted.len()
        );
        document.extend(converted);
    }
    Ok(document)
}

/// Convert record text into a single-subpath document
pub fn convert_records(source: &str) -> Result<Document, ConvertError> {
    let subpath = parser::parse_subpath(source)?;
    Ok(Document::from(vec![subpath]))
}

/// Convert source text of an already resolved input kind
pub fn convert_source(
    source: &str,
    kind: InputKind,
    config: &ConvertConfig,
) -> Result<Document, ConvertError> {
    match kind {
        InputKind::Svg => convert_svg(source, config),
        InputKind::Records | InputKind::Auto => convert_records(source),
    }
}

/// Encode every subpath of a document
pub fn encode_document(
    document: &Document,
    config: &OutputConfig,
) -> Result<Vec<String>, ConvertError> {
    document
        .iter()
        .map(|subpath| output::encode(subpath, config).map_err(ConvertError::from))
        .collect()
}

/// Encode a document and write one file per subpath next to `source_path`
///
/// Returns the written paths in subpath order.
pub fn write_outputs(
    source_path: &Path,
    document: &Document,
    config: &OutputConfig,
) -> Result<Vec<PathBuf>, ConvertError> {
    let encoded = encode_document(document, config)?;
    let names = output::output_names(source_path, encoded.len(), &config.extension);

    if names.is_empty() {
        warn!("{}: no paths found, nothing written", source_path.display());
    }

    for (name, content) in names.iter().zip(&encoded) {
        std::fs::write(name, content).map_err(|source| ConvertError::Io {
            path: name.clone(),
            source,
        })?;
        info!("wrote {}", name.display());
    }
    Ok(names)
}

/// Read, convert and write one file
pub fn convert_file(path: &Path, config: &ConvertConfig) -> Result<Vec<PathBuf>, ConvertError> {
    let source = read_source(path)?;
    convert_loaded(path, &source, config)
}

/// Outcome of converting one file of a batch
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// Source text, when the file could be read
    pub source: Option<String>,
    /// Written output paths, or why the file failed
    pub result: Result<Vec<PathBuf>, ConvertError>,
}

impl FileOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Printable description of the failure, if any
    ///
    /// Record errors are rendered as ariadne reports against the source.
    pub fn error_report(&self) -> Option<String> {
        let err = self.result.as_ref().err()?;
        let report = match (err, &self.source) {
            (ConvertError::Records(errors), Some(source)) => {
                let filename = self.path.display().to_string();
                errors
                    .iter()
                    .map(|e| e.format(source, &filename))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
            (ConvertError::Io { .. }, _) => err.to_string(),
            _ => format!("Error in '{}': {}", self.path.display(), err),
        };
        Some(report)
    }
}

/// Convert a batch of files
///
/// Every file is converted on its own; a failure is recorded in its
/// outcome and the batch carries on. Outcomes are in input order.
pub fn convert_files<P: AsRef<Path>>(paths: &[P], config: &ConvertConfig) -> Vec<FileOutcome> {
    paths
        .iter()
        .map(|path| {
            let path: &Path = path.as_ref();
            let (source, result) = match read_source(path) {
                Ok(source) => {
                    let result = convert_loaded(path, &source, config);
                    (Some(source), result)
                }
                Err(e) => (None, Err(e)),
            };
            if let Err(e) = &result {
                debug!("{}: failed: {}", path.display(), e);
            }
            FileOutcome {
                path: path.to_path_buf(),
                source,
                result,
            }
        })
        .collect()
}

fn read_source(path: &Path) -> Result<String, ConvertError> {
    std::fs::read_to_string(path).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn convert_loaded(
    path: &Path,
    source: &str,
    config: &ConvertConfig,
) -> Result<Vec<PathBuf>, ConvertError> {
    let kind = config.input.resolve(path);
    debug!("{}: converting as {}", path.display(), kind);

    let document = convert_source(source, kind, config)?;
    write_outputs(path, &document, &config.output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_svg_whole_element() {
        let doc = convert_svg(
            r#"<svg><path d="M0 0 Z M10 10 Z"/><path d="M1 1"/></svg>"#,
            &ConvertConfig::default(),
        )
        .unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.subpaths()[0].kind_codes(), vec![1, 1]);
    }

    #[test]
    fn test_convert_svg_per_close() {
        let config = ConvertConfig::new().with_segmentation(SegmentationMode::PerClose);
        let doc = convert_svg(
            r#"<svg><path d="M0 0 Z M10 10 Z"/><path d="M1 1"/></svg>"#,
            &config,
        )
        .unwrap();
        // the second path is never closed
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_convert_svg_relative_command_fails() {
        let result = convert_svg(
            r#"<svg><path d="M0 0 C1 1 2 2 3 3"/><path d="M0 0 q1 1 2 2"/></svg>"#,
            &ConvertConfig::default(),
        );
        assert!(matches!(
            result,
            Err(ConvertError::Normalize(NormalizeError::UnsupportedCommand { .. }))
        ));
    }

    #[test]
    fn test_convert_records() {
        let doc = convert_records("1 500.0 500.0\n").unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(
            doc.subpaths()[0].vertices(),
            &[Vertex::anchor(Point::new(500.0, 500.0))]
        );
    }

    #[test]
    fn test_convert_records_error() {
        let err = convert_records("1 500.0\n").unwrap_err();
        assert!(matches!(err, ConvertError::Records(_)));
        assert!(err.to_string().starts_with("record errors:"));
    }

    #[test]
    fn test_convert_source_dispatch() {
        let config = ConvertConfig::default();
        assert!(convert_source("1 0 0", InputKind::Records, &config).is_ok());
        assert!(convert_source("<svg/>", InputKind::Svg, &config)
            .unwrap()
            .is_empty());
    }
}
