use eframe::egui;
use pdf_images::{DragGesture, ImageCollection};

use crate::preview::{Thumbnail, TexturePreviewer};

/// Enum selector using ComboBox
pub fn enum_selector<T>(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    value: &mut T,
    options: &[(T, &str)],
) -> bool
where
    T: PartialEq + Clone,
{
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);

        let current_text = options
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, text)| *text)
            .unwrap_or("Unknown");

        egui::ComboBox::from_id_salt(id)
            .selected_text(current_text)
            .show_ui(ui, |ui| {
                for (option_value, option_text) in options {
                    if ui
                        .selectable_value(value, option_value.clone(), *option_text)
                        .changed()
                    {
                        changed = true;
                    }
                }
            });
    });
    changed
}

/// Human readable byte count
pub fn format_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    let bytes_f = bytes as f64;
    if bytes_f < KIB {
        format!("{} B", bytes)
    } else if bytes_f < KIB * KIB {
        format!("{:.1} KiB", bytes_f / KIB)
    } else {
        format!("{:.1} MiB", bytes_f / (KIB * KIB))
    }
}

const THUMBNAIL_EDGE: f32 = 64.0;

enum RowAction {
    Up(usize),
    Down(usize),
    Remove(usize),
}

/// Ordered image list with thumbnails, reorder buttons, removal and
/// drag-to-reorder
pub struct ImageListEditor<'a> {
    collection: &'a mut ImageCollection<TexturePreviewer>,
    gesture: &'a mut DragGesture,
}

impl<'a> ImageListEditor<'a> {
    pub fn new(
        collection: &'a mut ImageCollection<TexturePreviewer>,
        gesture: &'a mut DragGesture,
    ) -> Self {
        Self {
            collection,
            gesture,
        }
    }

    /// Returns true if the collection changed this frame
    pub fn show(self, ui: &mut egui::Ui) -> bool {
        if self.collection.is_empty() {
            self.gesture.drag_end();
            ui.label("No images selected. Add files or drop them onto the window.");
            return false;
        }

        let ctx = ui.ctx().clone();

        if !self.gesture.is_dragging() {
            if let Some(source) = egui::DragAndDrop::payload::<usize>(&ctx) {
                self.gesture.drag_start(*source);
            }
        }

        let len = self.collection.len();
        let mut action = None;
        let mut dropped_on = None;

        for (idx, (file, thumbnail)) in self.collection.iter().enumerate() {
            let row = ui.horizontal(|ui| {
                if idx > 0 && ui.small_button("▲").clicked() {
                    action = Some(RowAction::Up(idx));
                }
                if idx + 1 < len && ui.small_button("▼").clicked() {
                    action = Some(RowAction::Down(idx));
                }

                let handle_id = egui::Id::new(("image-row", idx));
                ui.dnd_drag_source(handle_id, idx, |ui| {
                    ui.label("☰");
                    show_thumbnail(ui, thumbnail);
                    ui.label(format!("{}. {}", idx + 1, file.name));
                });

                ui.weak(format_size(file.size));

                if ui.small_button("✖").clicked() {
                    action = Some(RowAction::Remove(idx));
                }
            });

            let response = row.response;
            if response.dnd_hover_payload::<usize>().is_some() {
                self.gesture.drag_over(idx);
            }
            if self.gesture.hover_target() == Some(idx) {
                ui.painter().rect_stroke(
                    response.rect,
                    2.0,
                    ui.visuals().selection.stroke,
                    egui::StrokeKind::Inside,
                );
            }
            if response.dnd_release_payload::<usize>().is_some() {
                dropped_on = Some(idx);
            }
        }

        let mut changed = false;

        if let Some(target) = dropped_on {
            changed |= self.gesture.drop_on(target, self.collection);
        } else if self.gesture.is_dragging() && !egui::DragAndDrop::has_any_payload(&ctx) {
            // Released outside any row
            self.gesture.drag_end();
        }

        changed |= match action {
            Some(RowAction::Up(idx)) => self.collection.move_up(idx),
            Some(RowAction::Down(idx)) => self.collection.move_down(idx),
            Some(RowAction::Remove(idx)) => self.collection.remove(idx),
            None => false,
        };

        changed
    }
}

fn show_thumbnail(ui: &mut egui::Ui, thumbnail: &Thumbnail) {
    match thumbnail.texture() {
        Some(texture) => {
            ui.add(
                egui::Image::new(egui::load::SizedTexture::from_handle(texture))
                    .max_size(egui::vec2(THUMBNAIL_EDGE, THUMBNAIL_EDGE)),
            );
        }
        None => {
            ui.add_sized([THUMBNAIL_EDGE, THUMBNAIL_EDGE], egui::Label::new("?"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1536), "1.5 KiB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MiB");
    }
}
