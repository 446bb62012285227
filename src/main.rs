mod app;
mod color;
mod config;
mod data;
mod state;
mod traces;
mod ui;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use app::SampleScopeApp;
use config::ScopeConfig;
use eframe::egui;

fn main() -> Result<()> {
    env_logger::init();

    let path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: sample-scope <recording.csv>")?;

    let config = ScopeConfig::default();
    let dataset = data::loader::load_file(&path)
        .with_context(|| format!("loading {}", path.display()))?;
    log::info!(
        "Loaded {} signal columns × {} samples from {}",
        dataset.column_count(),
        dataset.row_count(),
        path.display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sample Scope – Audio Debug Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(SampleScopeApp::new(config, path, dataset)))),
    )
    .map_err(|e| anyhow!("viewer failed: {e}"))
}
