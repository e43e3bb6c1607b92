use eframe::egui;
use std::path::PathBuf;

/// File extensions offered by the picker
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

pub enum ToolbarAction {
    AddFiles(Vec<PathBuf>),
    Clear,
}

pub fn show_toolbar(ui: &mut egui::Ui, item_count: usize, show_log: &mut bool) -> Option<ToolbarAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.button("➕ Add images…").clicked() {
            if let Some(paths) = rfd::FileDialog::new()
                .add_filter("Images", IMAGE_EXTENSIONS)
                .pick_files()
            {
                action = Some(ToolbarAction::AddFiles(paths));
            }
        }

        if ui
            .add_enabled(item_count > 0, egui::Button::new("🗑 Clear"))
            .clicked()
        {
            action = Some(ToolbarAction::Clear);
        }

        ui.separator();
        ui.label(format!("{} image(s)", item_count));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.toggle_value(show_log, "📜 Log");
        });
    });

    action
}
