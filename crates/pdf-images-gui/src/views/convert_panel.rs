use eframe::egui;
use pdf_async_runtime::{ConvertOptions, ImageFile, PdfCommand, UiEndpoint};
use pdf_images::WebpEmbedding;
use std::path::PathBuf;

use crate::ui_components::enum_selector;

#[derive(Clone)]
pub struct ProgressState {
    pub operation: String,
    pub current: usize,
    pub total: usize,
}

/// Output settings, the convert button and conversion feedback
pub struct ConvertPanel<'a> {
    pub options: &'a mut ConvertOptions,
    pub output_dir: &'a mut PathBuf,
    pub converting: &'a mut bool,
    pub progress: Option<&'a ProgressState>,
    pub status: &'a mut String,
}

impl ConvertPanel<'_> {
    pub fn show(
        self,
        ui: &mut egui::Ui,
        endpoint: &UiEndpoint,
        snapshot: impl FnOnce() -> Vec<ImageFile>,
    ) {
        ui.horizontal(|ui| {
            ui.label("Output folder:");
            ui.monospace(self.output_dir.display().to_string());
            if ui.button("📁 Choose…").clicked() {
                if let Some(dir) = rfd::FileDialog::new()
                    .set_directory(&*self.output_dir)
                    .pick_folder()
                {
                    *self.output_dir = dir;
                }
            }
        });

        ui.horizontal(|ui| {
            ui.label("File name:");
            ui.text_edit_singleline(&mut self.options.output_filename);
        });
        let valid = self.options.validate().is_ok();
        if !valid {
            ui.colored_label(
                ui.visuals().error_fg_color,
                "File name must end in .pdf and contain no path separators",
            );
        }

        enum_selector(
            ui,
            "webp_embedding",
            "WEBP images:",
            &mut self.options.webp_embedding,
            &[
                (WebpEmbedding::Decode, "Decode (lossless)"),
                (WebpEmbedding::LabelAsJpeg, "Embed raw as JPEG"),
            ],
        );

        ui.separator();

        let button = egui::Button::new("📄 Convert to PDF");
        if ui.add_enabled(!*self.converting && valid, button).clicked() {
            let command = PdfCommand::Convert {
                snapshot: snapshot(),
                options: self.options.clone(),
                output_dir: self.output_dir.clone(),
            };
            match endpoint.send(command) {
                Ok(()) => {
                    *self.converting = true;
                    *self.status = "Converting...".to_string();
                }
                Err(e) => {
                    log::error!("Could not dispatch conversion: {}", e);
                    *self.status = format!("Error: {e}");
                }
            }
        }

        if let Some(progress) = self.progress {
            ui.label(&progress.operation);
            ui.add(
                egui::ProgressBar::new(progress.current as f32 / progress.total.max(1) as f32)
                    .show_percentage(),
            );
        }

        if !self.status.is_empty() {
            ui.label(self.status.as_str());
        }
    }
}
