#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod handlers;
mod logger;
mod views;
mod worker;

fn main() -> eframe::Result<()> {
    let logger = logger::AppLogger::new(256);
    if logger.clone().init().is_err() {
        eprintln!("Logger already installed, continuing without one");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("Failed to start tokio runtime");
    let tokio_handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_title("Convert Tools"),
        ..Default::default()
    };

    eframe::run_native(
        "Convert Tools",
        options,
        Box::new(move |cc| Ok(Box::new(app::ConvertApp::new(cc, tokio_handle, logger)))),
    )
}
