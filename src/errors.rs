//! Errors for reading and writing puzzle files.

use std::io;
use std::path::{Path, PathBuf};

/// Error for file access during [`reformat_file`](crate::reformat_file)
/// and the puzzle drivers.
///
/// Covers "not found", "permission denied" and every other I/O failure on
/// the source read or the target write. The offending path is carried for
/// the diagnostic.
#[derive(Debug, thiserror::Error)]
pub enum FileAccessError {
    /// The source file could not be opened or read.
    #[error("could not read {}: {source}", path.display())]
    Read {
        /// Path of the file that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The target file could not be created or written.
    #[error("could not write {}: {source}", path.display())]
    Write {
        /// Path of the file that failed to write.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

impl FileAccessError {
    /// Wraps an I/O error from reading `path`.
    pub fn read(path: &Path, source: io::Error) -> Self {
        FileAccessError::Read {
            path: path.to_owned(),
            source,
        }
    }

    /// Wraps an I/O error from writing `path`.
    pub fn write(path: &Path, source: io::Error) -> Self {
        FileAccessError::Write {
            path: path.to_owned(),
            source,
        }
    }
}
