//! Document encoding
//!
//! The pipeline only talks to [`DocumentEncoder`]; [`LopdfEncoder`] is the
//! implementation that produces real PDF bytes.

mod image_stream;
mod pdf;

pub use image_stream::ImageStream;
pub use pdf::{LopdfDocument, LopdfEncoder};

use crate::types::{PageSpec, Placement, Result};
use std::sync::Arc;

/// Format label attached to image bytes when they are placed on a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedFormat {
    /// Embedded verbatim as a DCT stream
    Jpeg,
    Png,
    Gif,
    Webp,
}

impl EmbedFormat {
    pub fn name(self) -> &'static str {
        match self {
            EmbedFormat::Jpeg => "JPEG",
            EmbedFormat::Png => "PNG",
            EmbedFormat::Gif => "GIF",
            EmbedFormat::Webp => "WEBP",
        }
    }
}

/// Builds a paginated document one page at a time.
///
/// `create_document` opens the document with its first page; every later
/// page comes from `add_page`. `place_image` always targets the most
/// recently added page.
///
/// `prepare_image` and `save` do the CPU-heavy work (decoding, compression,
/// serialization). They take no `self` so the pipeline can run them on the
/// blocking pool.
pub trait DocumentEncoder {
    type Document: Send + 'static;
    /// Image content ready to be placed on a page
    type Image: Send + 'static;

    fn create_document(&mut self, page: &PageSpec) -> Result<Self::Document>;

    fn add_page(&mut self, document: &mut Self::Document, page: &PageSpec) -> Result<()>;

    fn prepare_image(data: Arc<[u8]>, format: EmbedFormat) -> Result<Self::Image>;

    fn place_image(
        &mut self,
        document: &mut Self::Document,
        image: Self::Image,
        placement: &Placement,
    ) -> Result<()>;

    /// Serialize the finished document
    fn save(document: Self::Document) -> Result<Vec<u8>>;
}
