//! Clipboard access and the copy-with-confirmation handler.

use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{ShellError, ShellResult};
use crate::pause::Pause;
use crate::surface::Surface;

/// Platform clipboard capability.
#[async_trait(?Send)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> ShellResult<()>;
}

/// The desktop clipboard via arboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

#[async_trait(?Send)]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> ShellResult<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ShellError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ShellError::Clipboard(e.to_string()))
    }
}

/// Records writes; can be switched to reject them.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    writes: Mutex<Vec<String>>,
    failing: Mutex<bool>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that rejects every write.
    pub fn failing() -> Self {
        let clipboard = Self::default();
        clipboard.set_failing(true);
        clipboard
    }

    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock() = failing;
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().clone()
    }

    /// Most recent successful write.
    pub fn contents(&self) -> Option<String> {
        self.writes.lock().last().cloned()
    }
}

#[async_trait(?Send)]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> ShellResult<()> {
        if *self.failing.lock() {
            return Err(ShellError::Clipboard("write rejected".to_string()));
        }
        self.writes.lock().push(text.to_string());
        Ok(())
    }
}

/// How a copy attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Written; the tooltip was shown and hidden again
    Copied,
    /// The clipboard refused; nothing was shown
    Failed,
}

/// Copy `text`, then flash the tooltip next to `control` for `tooltip`.
///
/// Failures are logged and otherwise swallowed.
pub async fn copy_with_confirmation<S, P, C>(
    surface: &S,
    pause: &P,
    clipboard: &C,
    text: &str,
    control: usize,
    tooltip: Duration,
) -> CopyOutcome
where
    S: Surface + ?Sized,
    P: Pause + ?Sized,
    C: Clipboard + ?Sized,
{
    match clipboard.write_text(text).await {
        Ok(()) => {
            tracing::debug!(control, "Copied {} bytes to clipboard", text.len());
            surface.set_tooltip_visible(control, true);
            pause.pause(tooltip).await;
            surface.set_tooltip_visible(control, false);
            CopyOutcome::Copied
        }
        Err(e) => {
            tracing::error!("Failed to copy text: {}", e);
            CopyOutcome::Failed
        }
    }
}
