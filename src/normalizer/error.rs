//! Error types for path normalization

use thiserror::Error;

use super::types::CommandKind;

/// Errors that can occur while normalizing a command sequence
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// A relative-coordinate command was found; these must be converted
    /// to absolute form before conversion
    #[error("unsupported relative command '{command}': convert the path to absolute coordinates")]
    UnsupportedCommand { command: CommandKind },
}

impl NormalizeError {
    /// Create an unsupported command error
    pub fn unsupported(command: CommandKind) -> Self {
        Self::UnsupportedCommand { command }
    }

    /// The offending command kind
    pub fn command(&self) -> CommandKind {
        match self {
            Self::UnsupportedCommand { command } => *command,
        }
    }
}
