mod app;
mod charts;
mod color;
mod config;
mod data;
mod reactive;
mod state;
mod ui;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use app::LaunchDashApp;
use eframe::egui;

fn main() -> Result<()> {
    env_logger::init();

    // A missing or malformed dataset aborts startup.
    let dataset = data::loader::load_file(Path::new(config::DATASET_PATH))
        .context("preparing launch dataset")?;
    let dataset = Arc::new(dataset);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config::WINDOW_SIZE)
            .with_min_inner_size(config::WINDOW_MIN_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        config::WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchDashApp::new(dataset)))),
    )
    .map_err(|e| anyhow!("running dashboard: {e}"))
}
