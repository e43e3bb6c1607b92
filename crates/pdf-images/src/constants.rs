//! Shared constants for image-to-PDF conversion
//!
//! Unit conversions and defaults used by the pipeline and the encoder.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Assumed pixel density of every source image
pub const PIXELS_PER_INCH: f32 = 96.0;

/// Millimeters per inch
pub const MM_PER_INCH: f32 = 25.4;

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / MM_PER_INCH;

/// Convert a pixel length to millimeters at 96 dpi
#[inline]
pub fn px_to_mm(pixels: u32) -> f32 {
    pixels as f32 / PIXELS_PER_INCH * MM_PER_INCH
}

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

// =============================================================================
// Output Defaults
// =============================================================================

/// Name of the delivered document
pub const DEFAULT_OUTPUT_FILENAME: &str = "converted.pdf";

/// Document title written to the PDF info dictionary
pub const DEFAULT_TITLE: &str = "Converted images";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_to_mm() {
        assert_eq!(px_to_mm(96), 25.4);
        assert!((px_to_mm(192) - 50.8).abs() < 1e-4);
        assert_eq!(px_to_mm(0), 0.0);
    }

    #[test]
    fn test_mm_to_pt() {
        assert!((mm_to_pt(25.4) - 72.0).abs() < 1e-3);
        assert!((mm_to_pt(210.0) - 595.28).abs() < 0.01);
    }
}
