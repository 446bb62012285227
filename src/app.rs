use std::path::PathBuf;

use eframe::egui;

use crate::config::ScopeConfig;
use crate::data::model::SignalDataset;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// Fraction of the monitor width the window takes on first show.
const WINDOW_WIDTH_FRACTION: f32 = 0.8;
/// Height/width ratio of the window (the original viewer used a 20×12 figure).
const WINDOW_ASPECT: f32 = 0.6;

pub struct SampleScopeApp {
    pub state: AppState,
    window_sized: bool,
}

impl SampleScopeApp {
    pub fn new(config: ScopeConfig, source: PathBuf, dataset: SignalDataset) -> Self {
        let mut state = AppState::new(config);
        state.set_dataset(source, dataset);
        Self {
            state,
            window_sized: false,
        }
    }

    /// Size and center the window from the detected monitor geometry.
    /// Runs once; the monitor size is only known after the first frame, so
    /// this cannot happen in `NativeOptions`.
    fn fit_window_to_monitor(&mut self, ctx: &egui::Context) {
        if self.window_sized {
            return;
        }
        self.window_sized = true;

        let Some(monitor) = ctx.input(|i| i.viewport().monitor_size) else {
            return;
        };
        if monitor.x <= 0.0 || monitor.y <= 0.0 {
            return;
        }

        let width = monitor.x * WINDOW_WIDTH_FRACTION;
        let size = egui::vec2(width, (width * WINDOW_ASPECT).min(monitor.y * 0.9));
        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(size));
        ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(egui::pos2(
            (monitor.x - size.x) * 0.5,
            (monitor.y - size.y) * 0.5,
        )));
    }
}

impl eframe::App for SampleScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.fit_window_to_monitor(ctx);

        // ---- Top panel: file info + open ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::signal_plot(ui, &self.state);
        });
    }
}
