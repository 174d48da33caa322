//! Error types for the scaffolding library.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by scaffolding operations.
///
/// Absent-but-expected artifacts are deliberately not errors: rollback records
/// them as warnings in the run report and keeps going. Only unusable input,
/// a broken template, or a real filesystem failure aborts an operation.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The entity name is empty or normalizes to nothing usable.
    #[error("invalid entity name: {0}")]
    InvalidArgument(String),

    /// A filesystem create, read, write, or delete failed.
    #[error("failed to {} {}", .action, .path.display())]
    Filesystem {
        /// What was being attempted ("create directory", "write", ...).
        action: &'static str,
        /// The path the operation touched.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A template failed to compile or render.
    #[error("template error: {0}")]
    Template(String),
}

impl ScaffoldError {
    /// Shorthand for a [`ScaffoldError::Filesystem`] with the given context.
    pub fn fs(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }
}
