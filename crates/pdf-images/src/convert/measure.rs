//! Reading and measuring source images

use crate::item::{ImageFile, ImageFormat};
use crate::types::*;
use image::ImageReader;
use std::io::Cursor;
use std::sync::Arc;

/// Raw bytes of one item plus its pixel size
#[derive(Debug, Clone)]
pub(crate) struct MeasuredImage {
    pub data: Arc<[u8]>,
    pub format: ImageFormat,
    pub width_px: u32,
    pub height_px: u32,
}

pub(crate) async fn read_and_measure(file: &ImageFile) -> Result<MeasuredImage> {
    let format = file
        .format()
        .ok_or_else(|| ConvertError::UnsupportedFormat(file.content_type.clone()))?;

    let data = file.read().await?;
    let (width_px, height_px) = measure_dimensions(Arc::clone(&data)).await?;

    log::debug!(
        "{}: {} {}x{} px",
        file.name,
        format.name(),
        width_px,
        height_px
    );

    Ok(MeasuredImage {
        data,
        format,
        width_px,
        height_px,
    })
}

/// Pixel size from the encoded header; nothing is decoded
pub async fn measure_dimensions(data: Arc<[u8]>) -> Result<(u32, u32)> {
    tokio::task::spawn_blocking(move || {
        let dimensions = ImageReader::new(Cursor::new(&data[..]))
            .with_guessed_format()?
            .into_dimensions()?;
        Ok::<_, ConvertError>(dimensions)
    })
    .await?
}
