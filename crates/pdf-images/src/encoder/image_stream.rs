//! Image XObject construction
//!
//! Building a stream (decoding, deflating) needs no document, so it can run
//! on the blocking pool; adding the finished stream to a document is cheap.

use super::EmbedFormat;
use crate::types::Result;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use image::codecs::jpeg::JpegDecoder;
use image::{ColorType, DynamicImage, ImageDecoder, ImageReader};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::io::{Cursor, Write};

/// A finished image XObject, plus its soft mask when the source has alpha
#[derive(Debug, Clone)]
pub struct ImageStream {
    dict: Dictionary,
    content: Vec<u8>,
    smask: Option<(Dictionary, Vec<u8>)>,
}

impl ImageStream {
    /// Add the stream (and its mask) to `doc` and return the image id
    pub(crate) fn add_to(self, doc: &mut Document) -> ObjectId {
        let mut dict = self.dict;
        if let Some((mask_dict, mask_content)) = self.smask {
            let smask_id = doc.add_object(Stream::new(mask_dict, mask_content));
            dict.set("SMask", Object::Reference(smask_id));
        }
        doc.add_object(Stream::new(dict, self.content))
    }
}

/// Build the image stream for `data`
pub(crate) fn build_image_stream(data: &[u8], format: EmbedFormat) -> Result<ImageStream> {
    match format {
        EmbedFormat::Jpeg => jpeg_stream(data),
        EmbedFormat::Png => decoded_stream(data, image::ImageFormat::Png),
        EmbedFormat::Gif => decoded_stream(data, image::ImageFormat::Gif),
        EmbedFormat::Webp => decoded_stream(data, image::ImageFormat::WebP),
    }
}

// =============================================================================
// JPEG pass-through
// =============================================================================

/// Embed JPEG bytes unchanged under DCTDecode.
///
/// Only the header is parsed, for the size and channel count. Bytes that are
/// labelled JPEG but are something else are still passed through, sized from
/// their real header.
fn jpeg_stream(data: &[u8]) -> Result<ImageStream> {
    let (width, height, color_space) = match JpegDecoder::new(Cursor::new(data)) {
        Ok(decoder) => {
            let (width, height) = decoder.dimensions();
            match decoder.color_type() {
                ColorType::L8 => (width, height, "DeviceGray"),
                ColorType::Rgb8 => (width, height, "DeviceRGB"),
                other => {
                    log::debug!("JPEG with {:?} samples, embedding decoded pixels", other);
                    return decoded_stream(data, image::ImageFormat::Jpeg);
                }
            }
        }
        Err(_) => {
            let (width, height) = ImageReader::new(Cursor::new(data))
                .with_guessed_format()?
                .into_dimensions()?;
            (width, height, "DeviceRGB")
        }
    };

    let mut dict = image_dictionary(width, height, color_space);
    dict.set("Filter", Object::Name(b"DCTDecode".to_vec()));

    Ok(ImageStream {
        dict,
        content: data.to_vec(),
        smask: None,
    })
}

// =============================================================================
// Decoded pixels
// =============================================================================

/// Decode to 8-bit samples and embed Flate-compressed, with a soft mask
/// carrying the alpha channel when the source has one.
fn decoded_stream(data: &[u8], declared: image::ImageFormat) -> Result<ImageStream> {
    // Trust the bytes over the declared type, fall back to the declared type
    let image = image::load_from_memory(data)
        .or_else(|_| image::load_from_memory_with_format(data, declared))?;

    let width = image.width();
    let height = image.height();
    let color = image.color();

    let (samples, color_space) = if color.channel_count() <= 2 {
        (image.to_luma8().into_raw(), "DeviceGray")
    } else {
        (image.to_rgb8().into_raw(), "DeviceRGB")
    };

    let mut dict = image_dictionary(width, height, color_space);
    dict.set("Filter", Object::Name(b"FlateDecode".to_vec()));

    let smask = if color.has_alpha() {
        Some(alpha_mask(&image)?)
    } else {
        None
    };

    Ok(ImageStream {
        dict,
        content: deflate(&samples)?,
        smask,
    })
}

fn alpha_mask(image: &DynamicImage) -> Result<(Dictionary, Vec<u8>)> {
    let alpha: Vec<u8> = image.to_rgba8().pixels().map(|p| p.0[3]).collect();

    let mut dict = image_dictionary(image.width(), image.height(), "DeviceGray");
    dict.set("Filter", Object::Name(b"FlateDecode".to_vec()));

    Ok((dict, deflate(&alpha)?))
}

fn image_dictionary(width: u32, height: u32, color_space: &str) -> Dictionary {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(width as i64));
    dict.set("Height", Object::Integer(height as i64));
    dict.set("ColorSpace", Object::Name(color_space.as_bytes().to_vec()));
    dict.set("BitsPerComponent", Object::Integer(8));
    dict
}

fn deflate(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}
