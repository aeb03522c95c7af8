use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

/// Destination for copied text. The UI thread is the only caller.
pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard. The handle is opened on first copy and kept alive so X11/Wayland
/// selections survive until the process exits.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.handle.is_none() {
            let clipboard = Clipboard::new().map_err(|error| ClipboardError(error.to_string()))?;
            self.handle = Some(clipboard);
        }
        let Some(clipboard) = self.handle.as_mut() else {
            return Err(ClipboardError("clipboard handle missing".to_string()));
        };
        clipboard
            .set_text(text.to_owned())
            .map_err(|error| ClipboardError(error.to_string()))
    }
}
