use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration, IO, and serialization failures.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Filesystem failure while creating the directory or writing a file.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// A record or manifest could not be encoded or decoded.
    #[error("serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Rejected settings, such as a zero batch size.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// A generated directory disagrees with its manifest.
    #[error("output at '{}' is inconsistent: {details}", .path.display())]
    InconsistentOutput {
        /// File or directory the check failed on.
        path: PathBuf,
        /// What did not match.
        details: String,
    },
}
