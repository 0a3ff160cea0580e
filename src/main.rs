mod app;
mod color;
mod config;
mod data;
mod error;
mod state;
mod ui;
mod views;

use app::DashboardApp;
use config::DashboardConfig;
use eframe::egui;
use state::AppState;
use views::RenderOptions;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::resolve();
    let table = data::load(&config.dataset_path)
        .map_err(anyhow::Error::from)
        .inspect_err(|e| log::error!("{e:#}"))?;

    let state = AppState::new(table, RenderOptions::from(&config));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Breast Cancer Detection",
        options,
        Box::new(|_cc| Ok(Box::new(DashboardApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running the dashboard window: {e}"))
}
