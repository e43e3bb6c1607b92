use crate::types::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Raster formats accepted for conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    Webp,
}

impl ImageFormat {
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        match content_type.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" | "image/pjpeg" => Some(ImageFormat::Jpeg),
            "image/png" => Some(ImageFormat::Png),
            "image/gif" => Some(ImageFormat::Gif),
            "image/webp" => Some(ImageFormat::Webp),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Png => "PNG",
            ImageFormat::Gif => "GIF",
            ImageFormat::Webp => "WEBP",
        }
    }

    pub fn to_image_format(self) -> image::ImageFormat {
        match self {
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Gif => image::ImageFormat::Gif,
            ImageFormat::Webp => image::ImageFormat::WebP,
        }
    }
}

/// `image/*` prefix match on a declared content type
pub fn is_image_content_type(content_type: &str) -> bool {
    content_type
        .trim()
        .to_ascii_lowercase()
        .starts_with("image/")
}

/// Guess a content type from a file extension
pub fn content_type_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase());

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") | Some("jpe") | Some("jfif") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("tif") | Some("tiff") => "image/tiff",
        Some("svg") => "image/svg+xml",
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Where an item's bytes live
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// Already in memory; clones share the buffer
    Memory(Arc<[u8]>),
    /// Read from disk when the pipeline reaches this item
    Path(PathBuf),
}

/// A selected file: name, byte size, declared content type and its bytes
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub name: String,
    pub size: u64,
    pub content_type: String,
    pub source: ImageSource,
}

impl ImageFile {
    pub fn from_bytes(
        name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Self {
        let bytes = bytes.into();
        Self {
            name: name.into(),
            size: bytes.len() as u64,
            content_type: content_type.into(),
            source: ImageSource::Memory(bytes),
        }
    }

    /// Build an item from a local file; only metadata is read here
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_owned();
        let metadata = tokio::fs::metadata(&path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            name,
            size: metadata.len(),
            content_type: content_type_for_path(&path).to_string(),
            source: ImageSource::Path(path),
        })
    }

    pub fn is_image(&self) -> bool {
        is_image_content_type(&self.content_type)
    }

    pub fn format(&self) -> Option<ImageFormat> {
        ImageFormat::from_content_type(&self.content_type)
    }

    /// Raw file bytes, untouched
    pub async fn read(&self) -> Result<Arc<[u8]>> {
        match &self.source {
            ImageSource::Memory(bytes) => Ok(Arc::clone(bytes)),
            ImageSource::Path(path) => {
                let bytes = tokio::fs::read(path).await?;
                Ok(bytes.into())
            }
        }
    }
}
