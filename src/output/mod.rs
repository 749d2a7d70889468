//! Path output: rescaling, encoding and file naming
//!
//! This module takes a normalized Document and produces one encoded
//! string per subpath, plus the file names they are written to.

pub mod config;
pub mod encode;
pub mod naming;
pub mod scale;

pub use config::{OutputConfig, OutputFormat};
pub use encode::encode;
pub use naming::output_names;
pub use scale::UnitTransform;
