//! # Skin Error Types
//!
//! Errors raised while building, loading or assigning skins. None of them is fatal:
//! a rejected skin leaves the previously assigned one active.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the skinning system.
#[derive(Error, Debug)]
pub enum SkinError {
    /// A skin description omits a metric every skin must supply.
    #[error("Skin '{skin}' is missing required metric '{metric}'")]
    MissingMetric {
        /// The name of the incomplete skin.
        skin: String,
        /// The metric that is missing.
        metric: &'static str,
    },

    /// A metric is present but outside its valid range.
    #[error("Skin '{skin}' has invalid value {value} for metric '{metric}'")]
    InvalidMetric {
        /// The name of the offending skin.
        skin: String,
        /// The metric that is out of range.
        metric: &'static str,
        /// The rejected value.
        value: i32,
    },

    /// Skin with the specified name is not registered.
    #[error("Skin '{name}' not found")]
    SkinNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// Skin file was not found.
    #[error("Skin file not found: {path:?}")]
    SkinFileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Error parsing a skin file.
    #[error("Failed to parse skin file {path:?}: {details}")]
    SkinParseError {
        /// The path of the file that failed to parse.
        path: PathBuf,
        /// Details about the parse error.
        details: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for skin operations.
pub type SkinResult<T> = Result<T, SkinError>;

impl SkinError {
    /// Create a missing metric error.
    pub fn missing(skin: impl Into<String>, metric: &'static str) -> Self {
        Self::MissingMetric {
            skin: skin.into(),
            metric,
        }
    }

    /// Create an invalid metric error.
    pub fn invalid(skin: impl Into<String>, metric: &'static str, value: i32) -> Self {
        Self::InvalidMetric {
            skin: skin.into(),
            metric,
            value,
        }
    }

    /// Create a skin not found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::SkinNotFound { name: name.into() }
    }

    /// Create a skin file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::SkinFileNotFound { path: path.into() }
    }

    /// Create a skin parse error.
    pub fn parse_error(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::SkinParseError {
            path: path.into(),
            details: details.into(),
        }
    }
}
