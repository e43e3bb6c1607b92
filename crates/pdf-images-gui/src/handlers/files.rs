use pdf_async_runtime::PdfUpdate;
use pdf_images::ImageFile;
use std::path::PathBuf;
use tokio::sync::mpsc;

use crate::preview::decode_thumbnail;

/// Turn picked or dropped paths into image items, in the given order, and
/// decode their thumbnails
pub async fn handle_load_files(paths: Vec<PathBuf>, update_tx: &mpsc::UnboundedSender<PdfUpdate>) {
    let mut files = Vec::with_capacity(paths.len());
    let mut thumbnails = Vec::new();

    for path in paths {
        let file = match ImageFile::from_path(&path).await {
            Ok(file) => file,
            Err(e) => {
                log::warn!("Failed to open {}: {}", path.display(), e);
                let _ = update_tx.send(PdfUpdate::Error {
                    message: format!("Failed to open {}", path.display()),
                });
                continue;
            }
        };

        if file.is_image() {
            let thumb_path = path.clone();
            match tokio::task::spawn_blocking(move || decode_thumbnail(&thumb_path)).await {
                Ok(Ok(thumbnail)) => thumbnails.push(thumbnail),
                Ok(Err(e)) => log::warn!("No preview for {}: {}", path.display(), e),
                Err(e) => log::error!("Thumbnail task failed for {}: {}", path.display(), e),
            }
        }
        files.push(file);
    }

    let _ = update_tx.send(PdfUpdate::FilesLoaded { files, thumbnails });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_loads_existing_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.png");
        let b = dir.path().join("b.txt");
        std::fs::write(&a, b"aa").unwrap();
        std::fs::write(&b, b"bbb").unwrap();

        let (tx, mut rx) = mpsc::unbounded_channel();
        handle_load_files(vec![a, b], &tx).await;

        match rx.recv().await.unwrap() {
            PdfUpdate::FilesLoaded { files, thumbnails } => {
                let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
                assert_eq!(names, vec!["a.png", "b.txt"]);
                assert_eq!(files[1].content_type, "text/plain");
                // a.png is not a real PNG, b.txt is not an image
                assert!(thumbnails.is_empty());
            }
            other => panic!("unexpected update {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_thumbnails_decoded_for_real_images() {
        let dir = tempfile::tempdir().unwrap();
        let photo = dir.path().join("photo.png");
        image::RgbImage::from_pixel(300, 600, image::Rgb([50, 60, 70]))
            .save(&photo)
            .unwrap();
        let notes = dir.path().join("notes.txt");
        std::fs::write(&notes, b"text").unwrap();

        let (tx, mut rx) = mpsc::unbounded_channel();
        handle_load_files(vec![notes, photo.clone()], &tx).await;

        match rx.recv().await.unwrap() {
            PdfUpdate::FilesLoaded { files, thumbnails } => {
                assert_eq!(files.len(), 2);
                assert_eq!(thumbnails.len(), 1);
                assert_eq!(thumbnails[0].path, photo);
                assert_eq!((thumbnails[0].width, thumbnails[0].height), (48, 96));
            }
            other => panic!("unexpected update {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_file_reports_error_and_continues() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("here.jpg");
        std::fs::write(&present, b"x").unwrap();

        let (tx, mut rx) = mpsc::unbounded_channel();
        handle_load_files(vec![dir.path().join("gone.jpg"), present], &tx).await;

        assert!(matches!(rx.recv().await, Some(PdfUpdate::Error { .. })));
        match rx.recv().await.unwrap() {
            PdfUpdate::FilesLoaded { files, .. } => assert_eq!(files.len(), 1),
            other => panic!("unexpected update {:?}", other),
        }
    }
}
