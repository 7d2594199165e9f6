//! Error types for rankcalc.
//!
//! The rank calculation itself is total and never fails. Errors only arise at
//! the edges: reading and validating configuration, parsing input documents
//! and parsing grade labels.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by configuration loading and input parsing.
#[derive(Debug, Error)]
pub enum RankError {
    /// File system errors
    #[error("Failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed TOML configuration
    #[error("Failed to parse {}: {}", .path.display(), .message)]
    ConfigParse { path: PathBuf, message: String },

    /// Configuration values that would break the calculation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed input document
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Grade label not in the threshold table
    #[error("Unknown level: {0:?}")]
    UnknownLevel(String),
}

impl RankError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the user can fix this by editing a file or argument.
    pub fn is_user_fixable(&self) -> bool {
        !matches!(self, RankError::Io { .. })
    }

    /// Suggestion printed alongside errors the user can fix.
    pub fn hint(&self) -> Option<&'static str> {
        if !self.is_user_fixable() {
            return None;
        }
        Some(match self {
            RankError::ConfigParse { .. } | RankError::InvalidConfig(_) => {
                "fix the configuration file or regenerate it with `rankcalc init --force`"
            }
            RankError::InvalidInput(_) => {
                "input must be a JSON object of numeric statistics, e.g. {\"commits\": 120}"
            }
            RankError::UnknownLevel(_) => "valid levels are S, A+, A, A-, B+, B, B-, C+, C",
            RankError::Io { .. } => return None,
        })
    }
}

pub type Result<T> = std::result::Result<T, RankError>;
