//! Error types for vos-enrich

use std::path::PathBuf;
use thiserror::Error;

/// Result type for enrichment operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal failures of the enrichment pipeline
///
/// Row-level anomalies in the delimited side files are not errors; they are
/// skipped while loading. Everything here aborts the run before the output
/// file is written.
#[derive(Error, Debug)]
pub enum Error {
    /// Input file missing or unreadable (includes invalid UTF-8)
    #[error("Cannot read {}: {source}", .path.display())]
    MissingFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Network document is not well-formed JSON
    #[error("Malformed JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Network document lacks the collections the merge touches
    #[error("Unexpected network structure: {0}")]
    Structure(String),

    /// Delimited side file could not be read as records
    #[error("Cannot read records from {}: {source}", .path.display())]
    Delimited {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Cluster number column is not an integer
    #[error("Invalid cluster number {value:?} at {}:{line}", .path.display())]
    Format {
        path: PathBuf,
        line: usize,
        value: String,
    },

    /// Output file could not be written
    #[error("Cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
