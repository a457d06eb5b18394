mod app;
mod config;
mod data;
mod error;
mod state;
mod ui;

use app::TimetableApp;
use config::AppConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 600.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Timetable Tool",
        options,
        Box::new(move |_cc| Ok(Box::new(TimetableApp::new(config)))),
    )
}
