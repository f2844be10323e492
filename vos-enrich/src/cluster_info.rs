//! Cluster description file loading
//!
//! Tab-separated, no header. Each usable record is `<number>\t<text>[\t...]`.
//! Records with fewer than two columns are skipped; a non-integer cluster
//! number invalidates the whole file.

use crate::{Error, Result};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// One cluster entry as written into `network.clusters`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterRecord {
    pub cluster: i64,
    pub label: String,
}

impl ClusterRecord {
    /// Build a record from the raw number column and description column
    ///
    /// The label keeps the number exactly as written in the file.
    fn from_columns(number_text: &str, number: i64, description: &str) -> Self {
        Self {
            cluster: number,
            label: format!("{}. {}", number_text, description.trim()),
        }
    }
}

/// Read and parse a cluster description file
pub fn load_cluster_info(path: &Path) -> Result<Vec<ClusterRecord>> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::MissingFile {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_cluster_info(&text, path)?;
    info!("Loaded {} cluster descriptions from {}", records.len(), path.display());
    Ok(records)
}

/// Parse cluster description text, preserving file order
///
/// Fields follow tab-separated CSV rules: a double-quoted field may contain
/// tabs and newlines, and `""` inside it is a literal quote.
/// `path` is only used for error reporting.
pub fn parse_cluster_info(text: &str, path: &Path) -> Result<Vec<ClusterRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut records = Vec::new();

    for row in reader.records() {
        let row = row.map_err(|source| Error::Delimited {
            path: path.to_path_buf(),
            source,
        })?;
        let line = row.position().map(|pos| pos.line() as usize).unwrap_or(0);

        let (number_text, description) = match (row.get(0), row.get(1)) {
            (Some(number_text), Some(description)) => (number_text, description),
            _ => {
                debug!("Skipping cluster line {}: fewer than two columns", line);
                continue;
            }
        };

        let number = number_text.trim().parse::<i64>().map_err(|_| Error::Format {
            path: path.to_path_buf(),
            line,
            value: number_text.to_string(),
        })?;

        records.push(ClusterRecord::from_columns(number_text, number, description));
    }

    Ok(records)
}
