//! Clipboard output for rendered previews.
//!
//! Commands write through the [`ClipboardSink`] trait so tests can capture
//! what would have been copied. [`SystemClipboard`] talks to the OS clipboard
//! via `arboard`; [`MemoryClipboard`] just remembers the last text.
//!
//! On X11 the copied text is owned by the process that set it. Without a
//! clipboard manager running, it disappears when `flashprompt` exits.

use anyhow::Result;
use arboard::Clipboard;
use tracing::debug;

use crate::core::FlashError;

/// Destination for copied text.
pub trait ClipboardSink {
    /// Replace the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard cannot be written.
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The operating system clipboard.
pub struct SystemClipboard {
    inner: Clipboard,
}

impl SystemClipboard {
    /// Connect to the system clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`FlashError::ClipboardUnavailable`] when there is no clipboard
    /// to talk to, e.g. a headless session without a display server.
    pub fn new() -> Result<Self> {
        let inner = Clipboard::new().map_err(|e| FlashError::ClipboardUnavailable {
            reason: e.to_string(),
        })?;
        Ok(Self {
            inner,
        })
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard").finish_non_exhaustive()
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.inner.set_text(text).map_err(|e| FlashError::ClipboardUnavailable {
            reason: e.to_string(),
        })?;
        Ok(())
    }
}

/// In-process clipboard that keeps the last copied text.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last copied text, if anything was copied.
    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Copy a rendered preview to `sink`.
///
/// An empty preview is not copied and leaves the clipboard as it was.
/// Returns whether anything was copied.
///
/// # Errors
///
/// Propagates the sink's write error.
pub fn copy_preview(sink: &mut dyn ClipboardSink, preview: &str) -> Result<bool> {
    if preview.is_empty() {
        debug!("Preview is empty, nothing copied");
        return Ok(false);
    }
    sink.set_text(preview)?;
    debug!(chars = preview.chars().count(), "Copied preview to clipboard");
    Ok(true)
}
