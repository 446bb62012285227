use eframe::egui::Color32;

use crate::color::trace_color;
use crate::data::model::SignalDataset;

// ---------------------------------------------------------------------------
// Trace assembly: dataset columns → ordered, colored plot traces
// ---------------------------------------------------------------------------

/// The raw input signal is always drawn first so every derived signal plots
/// on top of it, even though "sample" sorts after e.g. "envelope".
pub const LEAD_COLUMN: &str = "sample";

/// One named, colored signal ready for plotting against the shared time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub label: String,
    pub color: Color32,
    pub samples: Vec<f64>,
}

/// Turn the dataset into draw-ordered traces: the [`LEAD_COLUMN`] first when
/// present, everything else in ascending label order. The legend follows
/// this order, so it is identical across runs and across files that share
/// column names.
pub fn assemble_traces(dataset: &SignalDataset) -> Vec<Trace> {
    let columns = dataset.columns();
    let lead = columns.iter().position(|c| c.label == LEAD_COLUMN);

    let mut ordered: Vec<usize> = (0..columns.len()).filter(|&i| Some(i) != lead).collect();
    ordered.sort_by(|&a, &b| columns[a].label.cmp(&columns[b].label));
    if let Some(i) = lead {
        ordered.insert(0, i);
    }

    ordered
        .into_iter()
        .map(|i| Trace {
            label: columns[i].label.clone(),
            color: trace_color(&columns[i].label),
            samples: columns[i].samples.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::SignalColumn;

    fn dataset(labels: &[&str]) -> SignalDataset {
        SignalDataset::from_columns(
            labels
                .iter()
                .map(|&label| SignalColumn {
                    label: label.to_string(),
                    samples: vec![0.0; 4],
                })
                .collect(),
        )
    }

    fn labels(traces: &[Trace]) -> Vec<&str> {
        traces.iter().map(|t| t.label.as_str()).collect()
    }

    #[test]
    fn sample_column_leads_then_alphabetical() {
        let traces = assemble_traces(&dataset(&["sample", "b", "a", "c"]));
        assert_eq!(labels(&traces), vec!["sample", "a", "b", "c"]);
    }

    #[test]
    fn no_sample_column_is_fine() {
        let traces = assemble_traces(&dataset(&["y", "x"]));
        assert_eq!(labels(&traces), vec!["x", "y"]);
    }

    #[test]
    fn colors_match_the_label_hash() {
        let traces = assemble_traces(&dataset(&["sample", "gain"]));
        for t in &traces {
            assert_eq!(t.color, trace_color(&t.label));
        }
    }

    #[test]
    fn values_pass_through_untouched() {
        let ds = SignalDataset::from_columns(vec![
            SignalColumn {
                label: "sample".into(),
                samples: vec![1.0, 2.0, 3.0],
            },
            SignalColumn {
                label: "gain".into(),
                samples: vec![0.5, 0.6, 0.7],
            },
        ]);
        let traces = assemble_traces(&ds);
        assert_eq!(traces[0].label, "sample");
        assert_eq!(traces[0].samples, vec![1.0, 2.0, 3.0]);
        assert_eq!(traces[1].label, "gain");
        assert_eq!(traces[1].samples, vec![0.5, 0.6, 0.7]);
    }

    #[test]
    fn assembly_is_idempotent() {
        let ds = dataset(&["sample", "envelope", "gain"]);
        assert_eq!(assemble_traces(&ds), assemble_traces(&ds));
    }

    #[test]
    fn empty_dataset_yields_no_traces() {
        let traces = assemble_traces(&SignalDataset::default());
        assert!(traces.is_empty());
    }
}
