// src/main.rs
mod gui;
mod visualizer;
use std::path::PathBuf;
use eframe::egui;
use fourier_workbench::AppConfig;
use log::error;
fn main() -> eframe::Result<()> {
    env_logger::init();
    let config = match AppConfig::resolve(std::env::args_os().nth(1).map(PathBuf::from)) {
        Ok(config) => config,
        Err(err) => {
            error!("{err:#}; falling back to defaults");
            AppConfig::default()
        }
    };
    let width = config.waveform_canvas.width.max(config.harmonics_canvas.width) as f32 + 320.0;
    let height = (config.waveform_canvas.height + config.harmonics_canvas.height) as f32 + 120.0;
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([width, height])
        .with_min_inner_size([800.0, 600.0])
        .with_title("Fourier Series Approximation");
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Fourier Series Approximation",
        options,
        Box::new(move |_cc| Box::new(gui::FourierApp::new(config))),
    )
}
