//! Clipboard port

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the system clipboard adapter.
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("No clipboard utility available")]
    Unavailable,

    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Port for copying answer text to the system clipboard.
#[async_trait]
pub trait ClipboardPort: Send + Sync {
    async fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// No-op clipboard for environments without one (tests, CI).
pub struct NoClipboard;

#[async_trait]
impl ClipboardPort for NoClipboard {
    async fn copy(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}
