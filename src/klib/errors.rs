use std::path::PathBuf;
use thiserror::Error;

/// Failure modes of the clustering pipeline. Every variant is fatal;
/// main logs the message and exits non-zero.
#[derive(Debug, Error)]
pub enum ClusterError {
    /// Input file missing or unreadable.
    #[error("unable to read {}: {source}", path.display())]
    InputIo {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Missing header, no data rows, or an unparseable field.
    #[error("malformed input: {0}")]
    InputFormat(String),

    /// Row arity changed partway through the file.
    #[error("line {line}: expected {expected} features, found {found}")]
    DimensionMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Unusable clustering parameters.
    #[error("{0}")]
    InvalidArgument(String),

    /// Output file could not be created or written.
    #[error("unable to write {}: {source}", path.display())]
    OutputIo {
        path: PathBuf,
        source: std::io::Error,
    },
}
