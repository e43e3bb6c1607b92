pub mod convert_panel;
pub mod log_panel;
pub mod toolbar;

pub use convert_panel::{ConvertPanel, ProgressState};
pub use log_panel::show_log_panel;
pub use toolbar::{ToolbarAction, show_toolbar};
