use std::path::PathBuf;

use crate::config::ScopeConfig;
use crate::data::model::{time_axis_ms, SignalDataset};
use crate::traces::{assemble_traces, Trace};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full viewer state, independent of rendering.
pub struct AppState {
    pub config: ScopeConfig,

    /// Loaded dataset. The CLI loads one before the window opens; File →
    /// Open… can replace it.
    pub dataset: Option<SignalDataset>,

    /// Path the current dataset came from.
    pub source: Option<PathBuf>,

    /// Shared time axis in milliseconds, one entry per sample row.
    pub time_ms: Vec<f64>,

    /// Draw-ordered, colored traces derived from the dataset.
    pub traces: Vec<Trace>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: ScopeConfig) -> Self {
        Self {
            config,
            dataset: None,
            source: None,
            time_ms: Vec::new(),
            traces: Vec::new(),
            status_message: None,
        }
    }

    /// Ingest a newly loaded dataset: rebuild the time axis and traces.
    pub fn set_dataset(&mut self, source: PathBuf, dataset: SignalDataset) {
        self.time_ms = time_axis_ms(dataset.row_count(), self.config.sample_rate_hz);
        self.traces = assemble_traces(&dataset);
        self.source = Some(source);
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Length of the loaded recording in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.dataset
            .as_ref()
            .map_or(0.0, |ds| ds.row_count() as f64 * self.config.sample_period_ms())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::SignalColumn;

    fn three_row_dataset() -> SignalDataset {
        SignalDataset::from_columns(vec![
            SignalColumn {
                label: "sample".into(),
                samples: vec![1.0, 2.0, 3.0],
            },
            SignalColumn {
                label: "gain".into(),
                samples: vec![0.5, 0.6, 0.7],
            },
        ])
    }

    #[test]
    fn set_dataset_rebuilds_axis_and_traces() {
        let mut state = AppState::new(ScopeConfig::default());
        state.set_dataset(PathBuf::from("debug.csv"), three_row_dataset());

        assert_eq!(state.time_ms.len(), 3);
        assert_eq!(state.traces.len(), 2);
        assert_eq!(state.traces[0].label, "sample");
        assert_eq!(state.traces[1].label, "gain");
        assert!(state.status_message.is_none());
    }

    #[test]
    fn set_dataset_clears_stale_status() {
        let mut state = AppState::new(ScopeConfig::default());
        state.status_message = Some("Error: previous failure".into());
        state.set_dataset(PathBuf::from("debug.csv"), three_row_dataset());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn duration_follows_row_count() {
        let mut state = AppState::new(ScopeConfig::default());
        assert_eq!(state.duration_ms(), 0.0);
        state.set_dataset(PathBuf::from("debug.csv"), three_row_dataset());
        assert!((state.duration_ms() - 3.0 * 1000.0 / 44_100.0).abs() < 1e-9);
    }
}
