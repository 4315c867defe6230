use std::path::PathBuf;

use thiserror::Error;

/// Errors reading per-user timeline files.
#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line that is not one well-formed JSON record. Fatal: there is no
    /// per-line recovery.
    #[error("Malformed record at {}:{line}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors reading or appending a results table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("Failed to open table {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode table {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Table {} has no '{column}' column", .path.display())]
    MissingColumn { path: PathBuf, column: String },
}
