use crate::constants::{DEFAULT_OUTPUT_FILENAME, DEFAULT_TITLE};
use crate::encoder::EmbedFormat;
use crate::item::ImageFormat;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How WEBP sources are handed to the encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WebpEmbedding {
    /// Decode to pixels and embed losslessly
    #[default]
    Decode,
    /// Pass the raw bytes through the JPEG embedding path unchanged.
    /// Most viewers cannot render the result.
    LabelAsJpeg,
}

/// Conversion configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConvertOptions {
    /// File name of the delivered document
    pub output_filename: String,
    /// Title written into the document info dictionary
    pub title: String,
    pub webp_embedding: WebpEmbedding,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            output_filename: DEFAULT_OUTPUT_FILENAME.to_string(),
            title: DEFAULT_TITLE.to_string(),
            webp_embedding: WebpEmbedding::default(),
        }
    }
}

impl ConvertOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ConvertError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ConvertError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// The name is written as-is, so it is checked as-is
    pub fn validate(&self) -> Result<()> {
        let name = self.output_filename.as_str();
        if name.trim().is_empty() {
            return Err(ConvertError::Config(
                "Output file name is empty".to_string(),
            ));
        }
        if name.trim() != name {
            return Err(ConvertError::Config(format!(
                "Output file name has surrounding whitespace: {:?}",
                name
            )));
        }
        if name.contains(['/', '\\']) {
            return Err(ConvertError::Config(format!(
                "Output file name must not contain a path: {}",
                name
            )));
        }
        if !name.to_ascii_lowercase().ends_with(".pdf") {
            return Err(ConvertError::Config(format!(
                "Output file name must end in .pdf: {}",
                name
            )));
        }
        Ok(())
    }

    /// Label passed to the encoder for a source format
    pub fn embed_format(&self, format: ImageFormat) -> EmbedFormat {
        match format {
            ImageFormat::Jpeg => EmbedFormat::Jpeg,
            ImageFormat::Png => EmbedFormat::Png,
            ImageFormat::Gif => EmbedFormat::Gif,
            ImageFormat::Webp => match self.webp_embedding {
                WebpEmbedding::Decode => EmbedFormat::Webp,
                WebpEmbedding::LabelAsJpeg => EmbedFormat::Jpeg,
            },
        }
    }
}
