use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the SLA change analysis.
#[derive(Error, Debug)]
pub enum SlaError {
    /// The command line did not name exactly one input file.
    ///
    /// Carries the fully rendered usage or help text.
    #[error("{0}")]
    Usage(String),

    /// The input log file could not be opened.
    #[error("Error while opening input file {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `[sla]` line carried a client index that is not an integer.
    #[error("Error while parsing client index {token:?} on line {line_number}: {source}")]
    Parse {
        line_number: u64,
        token: String,
        #[source]
        source: ParseIntError,
    },

    /// Reading from the input failed part-way through the scan.
    #[error("Error while reading from {source_name} at line {line_number}: {source}")]
    Read {
        source_name: String,
        line_number: u64,
        #[source]
        source: std::io::Error,
    },

    /// The report could not be rendered as JSON.
    #[error("Failed to serialize report: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the sla crates.
pub type Result<T> = std::result::Result<T, SlaError>;
