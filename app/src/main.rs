#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod dialogs;
mod ui;

use app::MlPlatformApp;
use eframe::egui;
use ml_platform::AppConfig;

fn main() -> eframe::Result<()> {
    env_logger::init();
    let config = AppConfig::default();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(config.window_size),
        ..Default::default()
    };
    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| {
            ui::configure_style(&cc.egui_ctx);
            Ok(Box::new(MlPlatformApp::new(config)))
        }),
    )
}
