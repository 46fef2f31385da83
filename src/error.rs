//! Error types for sort-report

use std::path::PathBuf;
use thiserror::Error;

/// Report error type
#[derive(Error, Debug)]
pub enum Error {
    /// Measurement file missing or unreadable
    #[error("cannot read measurement file {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row does not fit the fixed 7-column layout
    #[error("schema error at line {line}: {message}")]
    Schema { line: u64, message: String },

    /// A plotted value is not numeric
    #[error("cannot plot {column} value {value:?} for dataset {dataset:?} (line {line})")]
    Render {
        dataset: String,
        column: &'static str,
        value: String,
        line: u64,
    },

    /// The chart sink failed to present a chart
    #[error("chart output error: {0}")]
    Sink(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn sink(err: impl std::fmt::Display) -> Self {
        Self::Sink(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
