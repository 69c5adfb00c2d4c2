//! Error type for the logo map generator.

use std::path::PathBuf;

/// Everything that can abort a `logo-map` run. Nothing is written on error.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// CSV file missing or unreadable.
    #[error("open CSV {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    /// Header row lacks a required column.
    #[error("CSV {} has no `{column}` column", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
    /// Malformed record or invalid UTF-8.
    #[error("parse CSV {}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    /// Output could not be written (permissions, missing parent directory).
    #[error("write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
