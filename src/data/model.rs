// ---------------------------------------------------------------------------
// SignalColumn – one named column of the CSV dump
// ---------------------------------------------------------------------------

/// A single named signal, one value per sample row.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalColumn {
    /// Column name from the CSV header.
    pub label: String,
    /// Per-sample values, in file order.
    pub samples: Vec<f64>,
}

// ---------------------------------------------------------------------------
// SignalDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset: named numeric columns, all of equal length.
///
/// Columns keep the header order of the source file; presentation ordering
/// (the `sample` column first, the rest alphabetical) is applied later by
/// [`crate::traces::assemble_traces`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignalDataset {
    columns: Vec<SignalColumn>,
}

impl SignalDataset {
    /// Wrap loaded columns. All columns must already have equal length;
    /// the loader guarantees this by building them row by row.
    pub fn from_columns(columns: Vec<SignalColumn>) -> Self {
        debug_assert!(
            columns
                .windows(2)
                .all(|w| w[0].samples.len() == w[1].samples.len()),
            "columns must have equal length"
        );
        SignalDataset { columns }
    }

    pub fn columns(&self) -> &[SignalColumn] {
        &self.columns
    }

    /// Number of signal columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of sample rows (shared by every column).
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.samples.len())
    }

    /// Whether there is nothing to plot.
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }
}

// ---------------------------------------------------------------------------
// Time axis
// ---------------------------------------------------------------------------

/// Build the shared time axis: one millisecond timestamp per sample row,
/// evenly spaced at `1000 / sample_rate_hz`, starting at 0.
pub fn time_axis_ms(rows: usize, sample_rate_hz: f64) -> Vec<f64> {
    let period_ms = 1000.0 / sample_rate_hz;
    (0..rows).map(|i| i as f64 * period_ms).collect()
}
