use thiserror::Error;
use trellis_layout::LayoutError;

/// Errors surfaced by the reporting layer and the demo binary.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Could not encode layout report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
