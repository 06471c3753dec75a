//! System clipboard adapter
//!
//! No clipboard API is available to a terminal client portably, so this
//! adapter pipes text into whichever clipboard utility the host has:
//! `wl-copy` (Wayland), `xclip`/`xsel` (X11), or `pbcopy` (macOS).

use async_trait::async_trait;
use policyq_application::{ClipboardError, ClipboardPort};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

/// Candidate utilities in preference order, with the arguments that make
/// them read from stdin and write the primary clipboard.
const CANDIDATES: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("pbcopy", &[]),
];

/// Clipboard adapter backed by an external utility detected at construction.
pub struct SystemClipboard {
    command: String,
    args: Vec<String>,
}

impl SystemClipboard {
    /// Detect an available clipboard utility.
    ///
    /// Returns `None` when the host has none; callers typically fall back
    /// to [`policyq_application::NoClipboard`].
    pub fn detect() -> Option<Self> {
        for (command, args) in CANDIDATES {
            if which::which(command).is_ok() {
                debug!("Using clipboard utility: {}", command);
                return Some(Self {
                    command: command.to_string(),
                    args: args.iter().map(|a| a.to_string()).collect(),
                });
            }
        }
        None
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

#[async_trait]
impl ClipboardPort for SystemClipboard {
    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
        }

        let status = child
            .wait()
            .await
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::WriteFailed(format!(
                "{} exited with {}",
                self.command, status
            )))
        }
    }
}
