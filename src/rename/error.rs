//! Error types for the batch renamer.
//!
//! A missing source file is not an error; it is reported as an outcome.
//! These variants cover the I/O failures that can happen once a rename is
//! actually attempted.

use std::io;

use thiserror::Error;

/// Errors that can occur while processing a rename entry.
#[derive(Debug, Error)]
pub enum RenameError {
    /// The existence check itself failed (e.g. permission denied on the
    /// directory), so it is unknown whether the source is present.
    #[error("Failed to check whether '{name}' exists")]
    Probe {
        /// Source file name being checked
        name: String,
        #[source]
        error: io::Error,
    },

    /// The source exists but could not be renamed.
    #[error("Failed to rename '{from}' to '{to}'")]
    Rename {
        /// Source file name
        from: String,
        /// Target file name
        to: String,
        #[source]
        error: io::Error,
    },
}

impl RenameError {
    /// Source file name of the entry that failed
    pub fn source_name(&self) -> &str {
        match self {
            RenameError::Probe { name, .. } => name,
            RenameError::Rename { from, .. } => from,
        }
    }

    /// The underlying I/O error
    pub fn io_error(&self) -> &io::Error {
        match self {
            RenameError::Probe { error, .. } | RenameError::Rename { error, .. } => error,
        }
    }
}
