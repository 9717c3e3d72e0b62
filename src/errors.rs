//! Shared error types for the application

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for spill operations
#[derive(Debug, Error)]
pub enum Error {
    /// Failures while reading the input stream
    #[error("failed to read standard input")]
    InputRead {
        #[source]
        source: io::Error,
    },

    /// Failures while opening or writing the destination file
    #[error("failed to write {}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Create an input-stream read error.
    pub fn input_read(source: io::Error) -> Self {
        Self::InputRead { source }
    }

    /// Create a destination-file write error with path context.
    pub fn file_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// The destination path this error relates to, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::FileWrite { path, .. } => Some(path),
            Self::InputRead { .. } => None,
        }
    }
}
