use eframe::egui;
use pdf_async_runtime::{ConvertOptions, PdfCommand, PdfUpdate, UiEndpoint};
use pdf_images::{DragGesture, ImageCollection};
use std::path::PathBuf;

use crate::logger::AppLogger;
use crate::preview::TexturePreviewer;
use crate::ui_components::ImageListEditor;
use crate::views::{ConvertPanel, ProgressState, ToolbarAction, show_log_panel, show_toolbar};

pub struct ImagesToPdfApp {
    collection: ImageCollection<TexturePreviewer>,
    gesture: DragGesture,
    options: ConvertOptions,
    output_dir: PathBuf,
    status: String,
    converting: bool,
    show_log: bool,
    logger: AppLogger,

    // Async infrastructure
    endpoint: UiEndpoint,
    progress: Option<ProgressState>,
    _tokio_handle: tokio::runtime::Handle,
}

impl ImagesToPdfApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        logger: AppLogger,
        tokio_handle: tokio::runtime::Handle,
    ) -> Self {
        let (endpoint, worker) = pdf_async_runtime::channel();

        // Spawn worker task
        tokio_handle.spawn(crate::worker::worker_task(worker));

        let output_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        Self {
            collection: ImageCollection::new(TexturePreviewer::new(cc.egui_ctx.clone())),
            gesture: DragGesture::new(),
            options: ConvertOptions::default(),
            output_dir,
            status: String::new(),
            converting: false,
            show_log: false,
            logger,
            endpoint,
            progress: None,
            _tokio_handle: tokio_handle,
        }
    }

    fn request_load(&mut self, paths: Vec<PathBuf>) {
        if paths.is_empty() {
            return;
        }
        match self.endpoint.send(PdfCommand::LoadFiles { paths }) {
            Ok(()) => self.status = "Loading images...".to_string(),
            Err(e) => self.status = format!("Error: {e}"),
        }
    }

    fn apply_update(&mut self, update: PdfUpdate) {
        match update {
            PdfUpdate::Progress {
                operation,
                current,
                total,
            } => {
                self.progress = Some(ProgressState {
                    operation,
                    current,
                    total,
                });
            }
            PdfUpdate::FilesLoaded { files, thumbnails } => {
                let offered = files.len();
                self.collection.renderer_mut().stage(thumbnails);
                let added = self.collection.add(files);
                self.collection.renderer_mut().clear_staged();
                log::debug!("Accepted {} of {} file(s)", added, offered);
                self.status = selection_status(self.collection.len());
            }
            PdfUpdate::ConversionComplete { path, pages } => {
                self.converting = false;
                self.progress = None;
                self.status = format!("Converted {} page(s) → {}", pages.len(), path.display());
            }
            PdfUpdate::ConversionFailed { message } => {
                self.converting = false;
                self.progress = None;
                self.status = message;
            }
            PdfUpdate::Error { message } => {
                self.status = format!("Error: {message}");
            }
        }
    }
}

impl eframe::App for ImagesToPdfApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Files dropped onto the window from the OS
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect()
        });
        self.request_load(dropped);

        // Process all pending updates from worker
        while let Some(update) = self.endpoint.try_recv() {
            self.apply_update(update);
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            match show_toolbar(ui, self.collection.len(), &mut self.show_log) {
                Some(ToolbarAction::AddFiles(paths)) => self.request_load(paths),
                Some(ToolbarAction::Clear) => {
                    self.collection.clear();
                    self.gesture.drag_end();
                    self.status = "Cleared".to_string();
                }
                None => {}
            }
        });

        egui::TopBottomPanel::bottom("convert").show(ctx, |ui| {
            let collection = &self.collection;
            ConvertPanel {
                options: &mut self.options,
                output_dir: &mut self.output_dir,
                converting: &mut self.converting,
                progress: self.progress.as_ref(),
                status: &mut self.status,
            }
            .show(ui, &self.endpoint, || collection.snapshot());
        });

        if self.show_log {
            egui::SidePanel::right("log")
                .resizable(true)
                .default_width(360.0)
                .show(ctx, |ui| show_log_panel(ui, &self.logger));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ImageListEditor::new(&mut self.collection, &mut self.gesture).show(ui);
                });
        });

        if self.converting || self.gesture.is_dragging() {
            ctx.request_repaint(); // Keep updating during operations
        }
    }
}

/// Status after a load; rejected inputs are never mentioned
fn selection_status(selected: usize) -> String {
    format!("{} image(s) selected", selected)
}
