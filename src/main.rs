#![warn(clippy::all, rust_2018_idioms)]
// hide console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use ino_gradient::config::CONFIG_ENV_VAR;
use ino_gradient::{EditorConfig, GradientApp};

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = EditorConfig::from_env().unwrap_or_else(|err| {
        log::warn!("Ignoring {}: {}", CONFIG_ENV_VAR, err);
        EditorConfig::default()
    });

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("ino gradient")
            .with_inner_size([720.0, 532.0])
            .with_min_inner_size([320.0, 240.0]),
        ..Default::default()
    };

    eframe::run_native(
        "ino gradient",
        native_options,
        Box::new(|cc| Ok(Box::new(GradientApp::new(cc, config)))),
    )
}
