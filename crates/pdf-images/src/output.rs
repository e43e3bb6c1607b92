//! Finished documents and their delivery

use crate::types::*;
use std::path::{Path, PathBuf};

/// Serialized document produced by one conversion; immutable once built
#[derive(Debug, Clone)]
pub struct OutputDocument {
    filename: String,
    bytes: Vec<u8>,
    pages: Vec<PageSpec>,
}

impl OutputDocument {
    pub(crate) fn new(filename: String, bytes: Vec<u8>, pages: Vec<PageSpec>) -> Self {
        Self {
            filename,
            bytes,
            pages,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn pages(&self) -> &[PageSpec] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Write the document into `dir` under its filename
    pub async fn deliver(self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = dir.as_ref().join(&self.filename);
        tokio::fs::write(&path, self.bytes).await?;
        log::info!("Wrote {} page(s) to {}", self.pages.len(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_deliver_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = OutputDocument::new(
            "converted.pdf".to_string(),
            b"%PDF-1.7".to_vec(),
            vec![PageSpec::from_pixels(96, 96)],
        );

        let path = output.deliver(dir.path()).await.unwrap();
        assert_eq!(path, dir.path().join("converted.pdf"));
        assert_eq!(std::fs::read(path).unwrap(), b"%PDF-1.7");
    }

    #[tokio::test]
    async fn test_deliver_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let output = OutputDocument::new("converted.pdf".to_string(), Vec::new(), Vec::new());
        let result = output.deliver(dir.path().join("missing")).await;
        assert!(matches!(result, Err(ConvertError::Io(_))));
    }
}
