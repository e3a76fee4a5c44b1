//! Persistence error types.
//!
//! Every failure carries a user-facing message and, where one exists, a hint
//! for fixing it.

use std::path::PathBuf;
use thiserror::Error;

/// Persistence operation error.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file parsed as JSON but is not a plan document.
    #[error("Invalid plan file format")]
    InvalidFormat { path: PathBuf, reason: String },

    #[error("Failed to serialize plan data")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse plan data")]
    Deserialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PersistenceError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the file at {}", operation, path.display())
            }
            Self::InvalidFormat { path, reason } => {
                format!(
                    "The file at {} is not a gas plan: {}",
                    path.display(),
                    reason
                )
            }
            Self::Serialization { .. } => "An error occurred while writing the plan.".to_string(),
            Self::Deserialization { path, source } => {
                format!(
                    "The file at {} is not valid JSON (line {}, column {}).",
                    path.display(),
                    source.line(),
                    source.column()
                )
            }
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save the plan to {}. Please check disk space and permissions.",
                    target_path.display()
                )
            }
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that the file exists and you have permission to read it.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::InvalidFormat { .. } => Some("Make sure you selected a saved .json plan.".into()),
            Self::Serialization { .. } => None,
            Self::Deserialization { .. } => Some("Try opening a backup if you have one.".into()),
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or try saving to a different location.".into())
            }
        }
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
