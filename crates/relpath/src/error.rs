// ABOUTME: Error types for relpath file operations.
// ABOUTME: Provides RelativizeError with Read and Write variants plus phase and exit code helpers.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that end a rewrite run. Neither kind is retried.
#[derive(Debug, Error)]
pub enum RelativizeError {
    /// The input document could not be opened, read, or decoded as UTF-8.
    #[error("error reading the HTML file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output document could not be created or written.
    #[error("error writing the updated HTML file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RelativizeError {
    /// Creates a Read error for `path`.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RelativizeError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a Write error for `path`.
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RelativizeError::Write {
            path: path.into(),
            source,
        }
    }

    /// Returns true if this is a Read error.
    pub fn is_read(&self) -> bool {
        matches!(self, RelativizeError::Read { .. })
    }

    /// Returns true if this is a Write error.
    pub fn is_write(&self) -> bool {
        matches!(self, RelativizeError::Write { .. })
    }

    /// The phase that failed: "reading" or "writing".
    pub fn phase(&self) -> &'static str {
        match self {
            RelativizeError::Read { .. } => "reading",
            RelativizeError::Write { .. } => "writing",
        }
    }

    /// The file the failing phase was working on.
    pub fn path(&self) -> &Path {
        match self {
            RelativizeError::Read { path, .. } | RelativizeError::Write { path, .. } => path,
        }
    }

    /// The underlying I/O error kind.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            RelativizeError::Read { source, .. } | RelativizeError::Write { source, .. } => {
                source.kind()
            }
        }
    }

    /// Process exit code for this failure. 2 is left to argument parsing.
    pub fn exit_code(&self) -> u8 {
        match self {
            RelativizeError::Read { .. } => 1,
            RelativizeError::Write { .. } => 3,
        }
    }
}
