//! Display handles for on-screen thumbnails

use crate::item::ImageFile;

/// Produces and releases display handles for thumbnails.
///
/// A handle is created once per item when it enters a collection and
/// released exactly once when it leaves. `release` consumes the handle.
pub trait PreviewRenderer {
    type Handle;

    fn create(&mut self, file: &ImageFile) -> Self::Handle;

    fn release(&mut self, handle: Self::Handle);
}

/// Renderer for front-ends without thumbnails
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPreviewer;

impl PreviewRenderer for NullPreviewer {
    type Handle = ();

    fn create(&mut self, _file: &ImageFile) -> Self::Handle {}

    fn release(&mut self, _handle: Self::Handle) {}
}
