use pdf_async_runtime::{PdfCommand, WorkerEndpoint};

use crate::handlers;

/// Async worker task that processes commands one at a time and sends updates.
///
/// Commands are handled strictly in arrival order, so a second conversion
/// never starts before the first has reported its outcome.
pub async fn worker_task(endpoint: WorkerEndpoint) {
    let WorkerEndpoint {
        mut command_rx,
        update_tx,
    } = endpoint;

    while let Some(cmd) = command_rx.recv().await {
        match cmd {
            PdfCommand::LoadFiles { paths } => {
                log::debug!("Loading {} file(s)", paths.len());
                handlers::files::handle_load_files(paths, &update_tx).await;
            }
            PdfCommand::Convert {
                snapshot,
                options,
                output_dir,
            } => {
                log::info!(
                    "Converting {} image(s) into {}",
                    snapshot.len(),
                    output_dir.display()
                );
                handlers::convert::handle_convert(snapshot, options, output_dir, &update_tx).await;
            }
        }
    }

    log::debug!("Worker stopped: command channel closed");
}
