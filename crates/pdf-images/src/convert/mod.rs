//! Image-to-PDF conversion pipeline
//!
//! For each image in order:
//! 1. Read the raw bytes
//! 2. Measure pixel dimensions
//! 3. Convert to a page size at 96 dpi
//! 4. Pick the orientation
//! 5. Open the document (first image) or append a page
//! 6. Draw the image over the whole page
//!
//! Decoding, compression and serialization run on the blocking pool. The
//! first failure aborts the run; nothing is produced.

mod measure;

pub use measure::measure_dimensions;

use crate::encoder::DocumentEncoder;
use crate::item::ImageFile;
use crate::options::ConvertOptions;
use crate::output::OutputDocument;
use crate::types::*;
use measure::{MeasuredImage, read_and_measure};
use std::sync::Arc;

/// Page plan for one image, without building a document
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedPage {
    pub name: String,
    pub width_px: u32,
    pub height_px: u32,
    pub page: PageSpec,
}

/// Convert a snapshot of the collection into one document
pub async fn convert<E: DocumentEncoder + 'static>(
    snapshot: &[ImageFile],
    encoder: &mut E,
    options: &ConvertOptions,
) -> Result<OutputDocument> {
    convert_with_progress(snapshot, encoder, options, |_, _| {}).await
}

/// Like [`convert`], calling `on_page(done, total)` after each page
pub async fn convert_with_progress<E, F>(
    snapshot: &[ImageFile],
    encoder: &mut E,
    options: &ConvertOptions,
    mut on_page: F,
) -> Result<OutputDocument>
where
    E: DocumentEncoder + 'static,
    F: FnMut(usize, usize),
{
    let (first, rest) = snapshot
        .split_first()
        .ok_or(ConvertError::EmptyCollection)?;
    options.validate()?;

    let total = snapshot.len();
    let mut pages = Vec::with_capacity(total);

    let image = read_and_measure(first).await?;
    let page = PageSpec::from_pixels(image.width_px, image.height_px);
    let prepared = prepare::<E>(&image, options).await?;
    let mut document = encoder.create_document(&page)?;
    place(encoder, &mut document, prepared, &page)?;
    pages.push(page);
    on_page(1, total);

    for file in rest {
        let image = read_and_measure(file).await?;
        let page = PageSpec::from_pixels(image.width_px, image.height_px);
        let prepared = prepare::<E>(&image, options).await?;
        encoder.add_page(&mut document, &page)?;
        place(encoder, &mut document, prepared, &page)?;
        pages.push(page);
        on_page(pages.len(), total);
    }

    let bytes = tokio::task::spawn_blocking(move || E::save(document)).await??;
    log::info!("Converted {} image(s) into {} bytes", total, bytes.len());

    Ok(OutputDocument::new(
        options.output_filename.clone(),
        bytes,
        pages,
    ))
}

/// Build the encoder's image content on the blocking pool
async fn prepare<E: DocumentEncoder + 'static>(
    image: &MeasuredImage,
    options: &ConvertOptions,
) -> Result<E::Image> {
    let data = Arc::clone(&image.data);
    let format = options.embed_format(image.format);
    tokio::task::spawn_blocking(move || E::prepare_image(data, format)).await?
}

fn place<E: DocumentEncoder>(
    encoder: &mut E,
    document: &mut E::Document,
    image: E::Image,
    page: &PageSpec,
) -> Result<()> {
    log::debug!(
        "Page {:.2}x{:.2} mm, {}",
        page.width_mm,
        page.height_mm,
        page.orientation.name()
    );
    encoder.place_image(document, image, &Placement::fill(page))
}

/// Read and measure every image and report the pages a conversion would
/// produce. Fails on the first unreadable image, like [`convert`].
pub async fn plan_pages(snapshot: &[ImageFile]) -> Result<Vec<PlannedPage>> {
    if snapshot.is_empty() {
        return Err(ConvertError::EmptyCollection);
    }

    let mut planned = Vec::with_capacity(snapshot.len());
    for file in snapshot {
        let image = read_and_measure(file).await?;
        planned.push(PlannedPage {
            name: file.name.clone(),
            width_px: image.width_px,
            height_px: image.height_px,
            page: PageSpec::from_pixels(image.width_px, image.height_px),
        });
    }
    Ok(planned)
}
