use eframe::egui::Ui;
use egui_plot::{GridInput, GridMark, Legend, Line, Plot, PlotPoints};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Signal plot (central panel)
// ---------------------------------------------------------------------------

/// Upper bound on vertical gridlines; beyond this the per-sample grid
/// decimates by powers of ten.
const MAX_GRID_LINES: f64 = 256.0;

/// Render the signal plot in the central panel.
pub fn signal_plot(ui: &mut Ui, state: &AppState) {
    if state.traces.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No signals to show  (File → Open…)");
        });
        return;
    }

    let period_ms = state.config.sample_period_ms();

    Plot::new("signal_plot")
        .legend(Legend::default())
        .x_axis_label("Time (ms)")
        .y_axis_label("Value")
        .x_grid_spacer(move |input| sample_grid_marks(input, period_ms))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for trace in &state.traces {
                let points: PlotPoints = state
                    .time_ms
                    .iter()
                    .zip(trace.samples.iter())
                    .map(|(&t, &v)| [t, v])
                    .collect();

                let line = Line::new(points)
                    .name(&trace.label)
                    .color(trace.color)
                    .width(1.5);

                plot_ui.line(line);
            }
        });
}

// ---------------------------------------------------------------------------
// Sample-boundary gridlines
// ---------------------------------------------------------------------------

/// X-axis gridlines on sample boundaries: marks at multiples of the sample
/// period, coarsened by powers of ten while the visible span would show more
/// than [`MAX_GRID_LINES`] of them.
pub(crate) fn sample_grid_marks(input: GridInput, period_ms: f64) -> Vec<GridMark> {
    let (min, max) = input.bounds;
    if !(period_ms.is_finite() && period_ms > 0.0) || max <= min {
        return Vec::new();
    }

    let mut step = period_ms;
    while (max - min) / step > MAX_GRID_LINES {
        step *= 10.0;
    }

    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last)
        .map(|i| GridMark {
            value: i as f64 * step,
            step_size: step,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(min: f64, max: f64) -> GridInput {
        GridInput {
            bounds: (min, max),
            base_step_size: 1.0,
        }
    }

    const PERIOD: f64 = 1000.0 / 44_100.0;

    #[test]
    fn marks_fall_on_sample_boundaries() {
        let marks = sample_grid_marks(grid(0.0, PERIOD * 10.5), PERIOD);
        assert_eq!(marks.len(), 11); // samples 0..=10
        for (i, m) in marks.iter().enumerate() {
            assert!((m.value - i as f64 * PERIOD).abs() < 1e-12);
        }
    }

    #[test]
    fn wide_view_decimates_by_powers_of_ten() {
        // ~44100 sample boundaries in a one-second view; the grid must
        // coarsen rather than emit them all.
        let marks = sample_grid_marks(grid(0.0, 1000.0), PERIOD);
        assert!(!marks.is_empty());
        assert!(marks.len() as f64 <= MAX_GRID_LINES + 1.0);
        let ratio = marks[0].step_size / PERIOD;
        let power = ratio.log10().round();
        assert!((ratio - 10f64.powf(power)).abs() < 1e-6 * ratio);
    }

    #[test]
    fn degenerate_bounds_yield_no_marks() {
        assert!(sample_grid_marks(grid(5.0, 5.0), PERIOD).is_empty());
        assert!(sample_grid_marks(grid(0.0, 10.0), 0.0).is_empty());
    }
}
