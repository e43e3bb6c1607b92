//! Pointer-drag reordering gesture
//!
//! idle -> dragging (on start) -> idle (on drop or end). Only `drop_on`
//! mutates the collection; hover is kept for visual feedback.

use super::{ImageCollection, PreviewRenderer};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragGesture {
    source: Option<usize>,
    hover: Option<usize>,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.source.is_some()
    }

    pub fn source(&self) -> Option<usize> {
        self.source
    }

    pub fn hover_target(&self) -> Option<usize> {
        self.hover
    }

    pub fn drag_start(&mut self, index: usize) {
        self.source = Some(index);
        self.hover = None;
    }

    pub fn drag_over(&mut self, index: usize) {
        if let Some(source) = self.source {
            if source != index {
                self.hover = Some(index);
            }
        }
    }

    /// Commit `move_item(source, index)` if a drag is active and the target
    /// differs from the source. The gesture is over either way.
    pub fn drop_on<R: PreviewRenderer>(
        &mut self,
        index: usize,
        collection: &mut ImageCollection<R>,
    ) -> bool {
        let Some(source) = self.source else {
            return false;
        };
        self.drag_end();
        if source == index {
            return false;
        }
        collection.move_item(source, index)
    }

    pub fn drag_end(&mut self) {
        self.source = None;
        self.hover = None;
    }
}
