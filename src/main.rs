mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::{anyhow, Context};
use app::GymDashboardApp;
use config::DashboardConfig;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::from_args(std::env::args().skip(1))?;

    // Without its data file the dashboard has nothing to show.
    let dataset = data::loader::load_file(&config.data_path)
        .inspect_err(|e| log::error!("Startup failed: {e}"))
        .with_context(|| format!("loading {}", config.data_path.display()))?;
    let state = AppState::new(dataset, config.data_path.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(config.inner_size)
            .with_min_inner_size(config.min_inner_size),
        ..Default::default()
    };

    eframe::run_native(
        &config.window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(GymDashboardApp::new(state)))),
    )
    .map_err(|e| anyhow!("dashboard window failed: {e}"))
}
