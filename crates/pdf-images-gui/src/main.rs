#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::{Context, anyhow};
use eframe::egui;
use log::LevelFilter;

mod app;
mod handlers;
mod logger;
mod preview;
mod ui_components;
mod views;
mod worker;

/// Records kept for the log panel
const LOG_CAPACITY: usize = 1000;

fn main() -> anyhow::Result<()> {
    let logger = logger::AppLogger::new(LOG_CAPACITY, LevelFilter::Debug);
    logger.clone().init().context("Failed to install logger")?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let _guard = runtime.enter();
    let tokio_handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_title("Images to PDF")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Images to PDF",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::ImagesToPdfApp::new(
                cc,
                logger,
                tokio_handle,
            )))
        }),
    )
    .map_err(|e| anyhow!("Failed to run window: {e}"))
}
