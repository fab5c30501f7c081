use letter_logging::{letter_debug, letter_warn};

/// Host clipboard access, replaceable in tests.
pub trait ClipboardWriter {
    /// Returns whether the host accepted the text.
    fn copy(&mut self, text: &str) -> bool;
}

/// System clipboard through `arboard`. The handle is opened lazily and
/// reopened after a failure.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn copy(&mut self, text: &str) -> bool {
        if self.inner.is_none() {
            match arboard::Clipboard::new() {
                Ok(clipboard) => self.inner = Some(clipboard),
                Err(err) => {
                    letter_warn!("Clipboard unavailable: {}", err);
                    return false;
                }
            }
        }
        let Some(clipboard) = self.inner.as_mut() else {
            return false;
        };
        match clipboard.set_text(text) {
            Ok(()) => {
                letter_debug!("Copied {} bytes to clipboard", text.len());
                true
            }
            Err(err) => {
                letter_warn!("Failed to copy text: {}", err);
                self.inner = None;
                false
            }
        }
    }
}
