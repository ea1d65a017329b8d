mod app;
mod convert;
mod fonts;
mod panels;
mod state;

use std::path::PathBuf;

use wayfind_core::config::WayfindConfig;

/// Config path from the first command-line argument, falling back to defaults.
fn startup_config() -> WayfindConfig {
    let Some(path) = std::env::args().nth(1).map(PathBuf::from) else {
        return WayfindConfig::default();
    };
    match WayfindConfig::load(&path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "config loaded");
            config
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "config not loaded, using defaults");
            WayfindConfig::default()
        }
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = startup_config();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 860.0])
            .with_min_inner_size([375.0, 700.0])
            .with_title("Wayfind"),
        ..Default::default()
    };

    eframe::run_native(
        "Wayfind",
        options,
        Box::new(|cc| Ok(Box::new(app::WayfindApp::new(&cc.egui_ctx, config)))),
    )
}
