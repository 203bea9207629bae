use anyhow::Context;
use eframe::egui;
use log::{error, info};

use investor_manual_egui::config::{AppConfig, ConfigSource};
use investor_manual_egui::ui::InvestorManualApp;

fn main() -> anyhow::Result<()> {
    // RUST_LOG controls verbosity, e.g. RUST_LOG=debug
    env_logger::init();
    info!("Starting Investor Manual egui application");

    let (config, source) = AppConfig::load().context("Failed to load configuration")?;
    match &source {
        ConfigSource::File(path) => info!("Using config file {:?}", path),
        ConfigSource::Defaults => info!("Using built-in configuration"),
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window.inner_size)
            .with_min_inner_size(config.window.min_inner_size)
            .with_title(config.window.title.clone())
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    let app_name = config.window.title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| match InvestorManualApp::new(cc, config) {
            Ok(app) => {
                info!("Successfully initialized Investor Manual app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe exited with an error: {}", e))
}
