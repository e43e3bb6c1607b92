use pdf_async_runtime::PdfUpdate;
use pdf_images::{ConvertError, ConvertOptions, ImageFile, LopdfEncoder};
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Run one conversion to completion and report the outcome.
///
/// The UI only ever receives the short user message; details go to the log.
pub async fn handle_convert(
    snapshot: Vec<ImageFile>,
    options: ConvertOptions,
    output_dir: PathBuf,
    update_tx: &mpsc::UnboundedSender<PdfUpdate>,
) {
    let mut encoder = LopdfEncoder::new(options.title.clone());

    let result = pdf_images::convert_with_progress(
        &snapshot,
        &mut encoder,
        &options,
        |current, total| {
            let _ = update_tx.send(PdfUpdate::Progress {
                operation: "Converting images".to_string(),
                current,
                total,
            });
        },
    )
    .await;

    let outcome = match result {
        Ok(output) => {
            let pages = output.pages().to_vec();
            output
                .deliver(&output_dir)
                .await
                .map(|path| (path, pages))
        }
        Err(e) => Err(e),
    };

    match outcome {
        Ok((path, pages)) => {
            let _ = update_tx.send(PdfUpdate::ConversionComplete { path, pages });
        }
        Err(e) => {
            match e {
                ConvertError::EmptyCollection => log::warn!("Conversion requested with no images"),
                ref other => log::error!("Conversion failed: {}", other),
            }
            let _ = update_tx.send(PdfUpdate::ConversionFailed {
                message: e.user_message().to_string(),
            });
        }
    }
}
