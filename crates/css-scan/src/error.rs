//! Source loading errors.

use std::path::PathBuf;
use thiserror::Error;

/// An error that stops a scan before it starts.
///
/// Findings in the stylesheet are never errors; only failing to obtain its
/// text is.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The file could not be opened or read.
    #[error("failed to read {}", path.display())]
    Read {
        /// The stylesheet path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid UTF-8.
    #[error("{} is not valid UTF-8", path.display())]
    Decode {
        /// The stylesheet path.
        path: PathBuf,
        /// The underlying decoding error.
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl ScanError {
    /// Returns the path of the stylesheet that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ScanError::Read { path, .. } | ScanError::Decode { path, .. } => path,
        }
    }
}
