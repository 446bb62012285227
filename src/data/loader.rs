use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{SignalColumn, SignalDataset};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong between a path on disk and a [`SignalDataset`].
/// All variants are fatal; the viewer has nothing to show without the data.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Unreadable or malformed CSV, including rows whose field count does
    /// not match the header (the `csv` crate checks record lengths).
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}, column '{column}': '{value}' is not a number")]
    NonNumeric {
        row: usize,
        column: String,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a signal dataset from a CSV file.
///
/// Expected layout: a header row naming each column, then one row per audio
/// sample with every cell numeric:
/// ```text
/// sample,envelope,gain
/// 0.01,0.01,1.0
/// 0.02,0.015,1.0
/// ```
pub fn load_file(path: &Path) -> Result<SignalDataset, DataLoadError> {
    let file = File::open(path).map_err(|source| DataLoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv(file)
}

/// Parse CSV from any reader. Split out from [`load_file`] so tests can
/// feed in-memory buffers.
pub(crate) fn read_csv<R: Read>(input: R) -> Result<SignalDataset, DataLoadError> {
    let mut reader = csv::Reader::from_reader(input);

    let mut columns: Vec<SignalColumn> = reader
        .headers()?
        .iter()
        .map(|label| SignalColumn {
            label: label.to_string(),
            samples: Vec::new(),
        })
        .collect();

    for (row, result) in reader.records().enumerate() {
        let record = result?;
        for (column, cell) in columns.iter_mut().zip(record.iter()) {
            let value: f64 = cell.trim().parse().map_err(|_| DataLoadError::NonNumeric {
                row,
                column: column.label.clone(),
                value: cell.to_string(),
            })?;
            column.samples.push(value);
        }
    }

    Ok(SignalDataset::from_columns(columns))
}
