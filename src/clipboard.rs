//! Clipboard-backed sharing.

use arboard::Clipboard;

use crate::share::{ShareError, ShareSink};

/// Shares text by copying it to the system clipboard.
///
/// The clipboard is opened lazily so a headless session can still start;
/// the failure surfaces on the first share attempt instead.
#[derive(Default)]
pub struct ClipboardSink {
    clipboard: Option<Clipboard>,
}

impl ClipboardSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn clipboard(&mut self) -> Result<&mut Clipboard, ShareError> {
        if self.clipboard.is_none() {
            let clipboard =
                Clipboard::new().map_err(|e| ShareError::Unavailable(e.to_string()))?;
            self.clipboard = Some(clipboard);
        }
        self.clipboard
            .as_mut()
            .ok_or_else(|| ShareError::Unavailable("clipboard not initialized".to_string()))
    }
}

impl ShareSink for ClipboardSink {
    fn share(&mut self, text: &str) -> Result<(), ShareError> {
        self.clipboard()?
            .set_text(text.to_string())
            .map_err(|e| ShareError::Failed(format!("Failed to set clipboard text: {}", e)))
    }
}
