use std::path::PathBuf;
use thiserror::Error;
use tokio::sync::mpsc;

// Re-export types from library crates
pub use pdf_images::{ConvertOptions, ImageFile, PageSpec};

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum PdfCommand {
    /// Build image items from local paths (metadata only)
    LoadFiles { paths: Vec<PathBuf> },
    /// Convert a snapshot of the collection and write it into `output_dir`
    Convert {
        snapshot: Vec<ImageFile>,
        options: ConvertOptions,
        output_dir: PathBuf,
    },
}

/// Downscaled RGBA pixels for one list entry, decoded off the UI thread
#[derive(Debug, Clone)]
pub struct ThumbnailData {
    pub path: PathBuf,
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum PdfUpdate {
    Progress {
        operation: String,
        current: usize,
        total: usize,
    },
    /// `thumbnails` covers the image files that could be decoded
    FilesLoaded {
        files: Vec<ImageFile>,
        thumbnails: Vec<ThumbnailData>,
    },
    ConversionComplete {
        path: PathBuf,
        pages: Vec<PageSpec>,
    },
    /// Conversion was rejected or failed; `message` is safe to show as-is
    ConversionFailed {
        message: String,
    },
    Error {
        message: String,
    },
}

#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("Worker has stopped")]
    WorkerStopped,
}

/// UI side of the command/update channel pair
pub struct UiEndpoint {
    command_tx: mpsc::UnboundedSender<PdfCommand>,
    update_rx: mpsc::UnboundedReceiver<PdfUpdate>,
}

/// Worker side of the command/update channel pair
pub struct WorkerEndpoint {
    pub command_rx: mpsc::UnboundedReceiver<PdfCommand>,
    pub update_tx: mpsc::UnboundedSender<PdfUpdate>,
}

/// Create a connected UI/worker endpoint pair
pub fn channel() -> (UiEndpoint, WorkerEndpoint) {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (update_tx, update_rx) = mpsc::unbounded_channel();
    (
        UiEndpoint {
            command_tx,
            update_rx,
        },
        WorkerEndpoint {
            command_rx,
            update_tx,
        },
    )
}

impl UiEndpoint {
    pub fn send(&self, command: PdfCommand) -> Result<(), RuntimeError> {
        self.command_tx
            .send(command)
            .map_err(|_| RuntimeError::WorkerStopped)
    }

    /// Next pending update, without waiting
    pub fn try_recv(&mut self) -> Option<PdfUpdate> {
        self.update_rx.try_recv().ok()
    }
}
