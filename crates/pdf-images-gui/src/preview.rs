//! Thumbnail textures for the image list
//!
//! Pixels are decoded on the worker (`decode_thumbnail`) and staged here by
//! path; `create` only uploads what was staged.

use eframe::egui;
use pdf_async_runtime::ThumbnailData;
use pdf_images::{ImageFile, ImageSource, PreviewRenderer};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Longest side of a thumbnail in pixels
const THUMBNAIL_SIZE: u32 = 96;

/// Display handle: a GPU texture, or nothing if the file could not be decoded
pub struct Thumbnail {
    texture: Option<egui::TextureHandle>,
}

impl Thumbnail {
    pub fn texture(&self) -> Option<&egui::TextureHandle> {
        self.texture.as_ref()
    }
}

/// Uploads worker-decoded thumbnails as egui textures
pub struct TexturePreviewer {
    ctx: egui::Context,
    next_id: u64,
    live: usize,
    staged: HashMap<PathBuf, ThumbnailData>,
}

impl TexturePreviewer {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            next_id: 0,
            live: 0,
            staged: HashMap::new(),
        }
    }

    /// Handles created and not yet released
    pub fn live_handles(&self) -> usize {
        self.live
    }

    /// Make decoded pixels available to the next `create` calls
    pub fn stage(&mut self, thumbnails: Vec<ThumbnailData>) {
        self.staged
            .extend(thumbnails.into_iter().map(|t| (t.path.clone(), t)));
    }

    pub fn clear_staged(&mut self) {
        self.staged.clear();
    }
}

impl PreviewRenderer for TexturePreviewer {
    type Handle = Thumbnail;

    fn create(&mut self, file: &ImageFile) -> Self::Handle {
        self.next_id += 1;
        self.live += 1;

        let staged = match &file.source {
            ImageSource::Path(path) => self.staged.get(path),
            ImageSource::Memory(_) => None,
        };

        let texture = match staged {
            Some(thumbnail) => Some(self.ctx.load_texture(
                format!("thumbnail-{}", self.next_id),
                egui::ColorImage::from_rgba_unmultiplied(
                    [thumbnail.width, thumbnail.height],
                    &thumbnail.rgba,
                ),
                egui::TextureOptions::LINEAR,
            )),
            None => {
                log::debug!("No preview for {}", file.name);
                None
            }
        };

        Thumbnail { texture }
    }

    fn release(&mut self, handle: Self::Handle) {
        self.live = self.live.saturating_sub(1);
        // Dropping the last TextureHandle frees the texture
        drop(handle);
    }
}

/// Decode and downscale one image. Blocking; call from the worker.
pub fn decode_thumbnail(path: &Path) -> anyhow::Result<ThumbnailData> {
    let thumbnail = image::open(path)?
        .thumbnail(THUMBNAIL_SIZE, THUMBNAIL_SIZE)
        .to_rgba8();
    Ok(ThumbnailData {
        path: path.to_path_buf(),
        width: thumbnail.width() as usize,
        height: thumbnail.height() as usize,
        rgba: thumbnail.into_raw(),
    })
}
