//! Measurement records and the table loader
//!
//! The benchmark harness writes one headerless CSV row per sorting run:
//!
//! ```text
//! timestamp,algorithm,dataset,size,time_ms,mem_mb,bytes_used
//! 2024-01-01T00:00:00,radix_sort,uniform_random,1000000,152.3,48.2,4000000
//! ```
//!
//! Columns are named by position. Fields are kept as the text read from the
//! file; numeric parsing happens only when a value is plotted.

mod partition;

pub use partition::{DatasetOrder, DatasetPartition};

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Column names, in file order
pub const COLUMNS: [&str; 7] = [
    "timestamp",
    "algorithm",
    "dataset",
    "size",
    "time_ms",
    "mem_mb",
    "bytes_used",
];

/// One row of the measurement file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// When the run occurred
    pub timestamp: String,
    /// Sorting algorithm under test
    pub algorithm: String,
    /// Input dataset / distribution label
    pub dataset: String,
    /// Number of elements sorted
    pub size: String,
    /// Wall-clock duration in milliseconds
    pub time_ms: String,
    /// Peak memory usage in megabytes
    pub mem_mb: String,
    /// Data volume processed in bytes
    pub bytes_used: String,
    /// 1-based line in the source file
    #[serde(skip)]
    pub line: u64,
}

impl MeasurementRecord {
    /// Number of elements sorted, if the field is an integer
    pub fn size(&self) -> Option<u64> {
        self.size.trim().parse().ok()
    }

    /// Duration in milliseconds, if the field is a finite number
    pub fn time_ms(&self) -> Option<f64> {
        parse_finite(&self.time_ms)
    }

    /// Peak memory in megabytes, if the field is a finite number
    pub fn mem_mb(&self) -> Option<f64> {
        parse_finite(&self.mem_mb)
    }

    /// Bytes processed, if the field is a finite number
    pub fn bytes_used(&self) -> Option<f64> {
        parse_finite(&self.bytes_used)
    }
}

pub(crate) fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// All measurement rows, in file order
#[derive(Debug, Clone, Default)]
pub struct MeasurementTable {
    records: Vec<MeasurementRecord>,
}

impl MeasurementTable {
    /// Load a measurement file from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file_access = |source| Error::FileAccess {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(file_access)?;
        let table = Self::from_reader(file).map_err(|err| match err {
            Error::Io(source) => file_access(source),
            other => other,
        })?;

        tracing::info!(
            "Loaded {} measurement rows from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Load measurement rows from any reader
    ///
    /// Every row must have exactly seven fields. Blank lines are ignored, as
    /// is a row that repeats the column names, so a header-only file loads
    /// as an empty table.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = Vec::new();
        for row in rdr.records() {
            let row = row.map_err(classify_csv_error)?;
            let line = row.position().map_or(0, |p| p.line());

            if row.len() != COLUMNS.len() {
                return Err(Error::Schema {
                    line,
                    message: format!(
                        "expected {} fields ({}), found {}",
                        COLUMNS.len(),
                        COLUMNS.join(","),
                        row.len()
                    ),
                });
            }

            if is_header(&row) {
                tracing::debug!("Skipping header row at line {}", line);
                continue;
            }

            let mut record: MeasurementRecord =
                row.deserialize(None).map_err(|e| Error::Schema {
                    line,
                    message: e.to_string(),
                })?;
            record.line = line;
            records.push(record);
        }

        Ok(Self { records })
    }

    /// Build a table from already-parsed records
    pub fn from_records(records: Vec<MeasurementRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MeasurementRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[MeasurementRecord] {
        &self.records
    }
}

fn is_header(row: &csv::StringRecord) -> bool {
    row.iter()
        .zip(COLUMNS)
        .all(|(field, name)| field.trim().eq_ignore_ascii_case(name))
}

fn classify_csv_error(err: csv::Error) -> Error {
    let line = err.position().map_or(0, |p| p.line());
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => Error::Io(source),
        _ => Error::Schema { line, message },
    }
}
