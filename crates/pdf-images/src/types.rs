use crate::constants::px_to_mm;
use thiserror::Error;

/// Shown when a conversion is requested with nothing selected
pub const EMPTY_COLLECTION_MESSAGE: &str = "Please select at least one image.";

/// Shown for every other conversion failure
pub const CONVERSION_FAILED_MESSAGE: &str = "Failed to convert images to PDF.";

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("No images to convert")]
    EmptyCollection,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("Encoder error: {0}")]
    Encoder(String),
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl ConvertError {
    /// The only text a user ever sees for a failed conversion.
    ///
    /// Everything except an empty collection collapses into one generic
    /// message; the detailed error is meant for the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            ConvertError::EmptyCollection => EMPTY_COLLECTION_MESSAGE,
            _ => CONVERSION_FAILED_MESSAGE,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height >= width
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

impl Orientation {
    /// Ties resolve to portrait.
    pub fn from_dimensions(width: f32, height: f32) -> Self {
        if width > height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

/// Physical size of one output page
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageSpec {
    pub width_mm: f32,
    pub height_mm: f32,
    pub orientation: Orientation,
}

impl PageSpec {
    /// Derive the page from an image's pixel dimensions at a fixed 96 dpi.
    pub fn from_pixels(width_px: u32, height_px: u32) -> Self {
        let width_mm = px_to_mm(width_px);
        let height_mm = px_to_mm(height_px);
        Self {
            width_mm,
            height_mm,
            orientation: Orientation::from_dimensions(width_mm, height_mm),
        }
    }

    /// Dimensions with orientation applied (long side horizontal for landscape)
    pub fn oriented_dimensions_mm(&self) -> (f32, f32) {
        let (short, long) = if self.width_mm <= self.height_mm {
            (self.width_mm, self.height_mm)
        } else {
            (self.height_mm, self.width_mm)
        };
        match self.orientation {
            Orientation::Portrait => (short, long),
            Orientation::Landscape => (long, short),
        }
    }
}

/// Where an image is drawn on its page, in millimeters from the page origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x_mm: f32,
    pub y_mm: f32,
    pub width_mm: f32,
    pub height_mm: f32,
}

impl Placement {
    /// Cover the whole page, no margins
    pub fn fill(page: &PageSpec) -> Self {
        let (width_mm, height_mm) = page.oriented_dimensions_mm();
        Self {
            x_mm: 0.0,
            y_mm: 0.0,
            width_mm,
            height_mm,
        }
    }
}
