// main.rs - Conway's Game of Life hosted in an eframe window
//
// All automaton state lives in `conway::Session`; this binary only loads the
// configuration, sets up logging and forwards egui input as commands.

use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod ui;

use ui::ConwayApp;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let cfg = config::load()?;
    info!(interval_ms = cfg.interval_ms, evaluator = ?cfg.evaluator, "conway starting");

    let side = cfg.cell_size * conway::GRID_SIZE as f32;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([side.max(640.0) + 40.0, side + 220.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(ConwayApp::new(&cfg))),
    )
    .map_err(|err| format!("eframe: {err}"))?;

    Ok(())
}
