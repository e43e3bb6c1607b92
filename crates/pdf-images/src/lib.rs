pub mod collection;
mod constants;
pub mod convert;
pub mod encoder;
mod item;
mod options;
mod output;
mod types;

pub use collection::{DragGesture, ImageCollection, NullPreviewer, PreviewRenderer};
pub use constants::{
    DEFAULT_OUTPUT_FILENAME, MM_PER_INCH, PIXELS_PER_INCH, POINTS_PER_MM, mm_to_pt, px_to_mm,
};
pub use convert::{PlannedPage, convert, convert_with_progress, plan_pages};
pub use encoder::{DocumentEncoder, EmbedFormat, LopdfEncoder};
pub use item::{ImageFile, ImageFormat, ImageSource, content_type_for_path, is_image_content_type};
pub use options::*;
pub use output::OutputDocument;
pub use types::*;
