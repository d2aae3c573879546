mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use app::GridAtlasApp;
use eframe::egui;

const DEFAULT_DATASET: &str = "db/substations.xml";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Dataset path: first CLI argument, or the bundled sample.
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET));

    // Load once, before the UI exists. A bad file is fatal here: the app
    // never serves a partially loaded dataset.
    let dataset = data::loader::load_file(&path)
        .with_context(|| format!("loading substation data from {}", path.display()))?;
    log::info!("loaded {} substation records from {}", dataset.len(), path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Grid Atlas – Substation Map",
        options,
        Box::new(move |_cc| Ok(Box::new(GridAtlasApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
