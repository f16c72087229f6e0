//! Clipboard bridge
//!
//! Host clipboard access is event driven: a copy, cut or paste event carries
//! the clipboard items and lets its default action be suppressed. The bridge
//! turns those events into selections or image blobs and back.
//!
//! Paste precedence is fixed: an image item always wins over a serialized
//! selection, even when both are present.

#[cfg(feature = "system-clipboard")]
mod system;
#[cfg(feature = "system-clipboard")]
pub use system::SystemClipboard;

use crate::{Position, Result, Selection, SelectionError};

/// Payload of a single clipboard item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardData {
    Text(String),
    Binary(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardItem {
    pub mime: String,
    pub data: ClipboardData,
}

impl ClipboardItem {
    pub fn text(mime: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            mime: mime.into(),
            data: ClipboardData::Text(text.into()),
        }
    }

    pub fn binary(mime: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            mime: mime.into(),
            data: ClipboardData::Binary(bytes.into()),
        }
    }

    /// # Errors
    ///
    /// Returns [`SelectionError::NotText`] for binary items.
    pub fn as_text(&self) -> Result<&str> {
        match &self.data {
            ClipboardData::Text(text) => Ok(text),
            ClipboardData::Binary(_) => Err(SelectionError::NotText { mime: self.mime.clone() }),
        }
    }

    fn bytes(&self) -> &[u8] {
        match &self.data {
            ClipboardData::Text(text) => text.as_bytes(),
            ClipboardData::Binary(bytes) => bytes,
        }
    }
}

/// What a clipboard item is, judged by its MIME type only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardItemKind {
    Image,
    PlainTextSelection,
    Other,
}

impl ClipboardItemKind {
    pub fn classify(mime: &str, text_mime: &str) -> Self {
        let mime = mime.trim().to_ascii_lowercase();
        if mime.starts_with("image") {
            ClipboardItemKind::Image
        } else if mime.starts_with(&text_mime.to_ascii_lowercase()) {
            ClipboardItemKind::PlainTextSelection
        } else {
            ClipboardItemKind::Other
        }
    }
}

/// A copy/cut/paste event as delivered by the host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardEvent {
    items: Vec<ClipboardItem>,
    written: Vec<ClipboardItem>,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl ClipboardEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Event exposing the given clipboard items, as for a paste
    pub fn with_items(items: Vec<ClipboardItem>) -> Self {
        Self { items, ..Default::default() }
    }

    pub fn items(&self) -> &[ClipboardItem] {
        &self.items
    }

    /// Items written during a copy or cut
    pub fn written(&self) -> &[ClipboardItem] {
        &self.written
    }

    pub fn get_written_text(&self, mime: &str) -> Option<&str> {
        self.written.iter().find(|item| item.mime == mime).and_then(|item| item.as_text().ok())
    }

    /// Sets the outgoing data for a MIME slot, replacing earlier data in that slot
    pub fn set_data(&mut self, mime: &str, text: impl Into<String>) {
        self.written.retain(|item| item.mime != mime);
        self.written.push(ClipboardItem::text(mime, text));
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Undecoded image taken from the clipboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBlob {
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Decodes image blobs and inserts them into the document.
///
/// Decoding may finish later through the host's own callback; the paste
/// handler doesn't wait for it.
pub trait ImageImporter {
    fn import_image(&mut self, blob: ImageBlob, position: Position);
}

/// Raw paste source, chosen before anything is parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteSource {
    Image(ImageBlob),
    Text(String),
    Empty,
}

/// Fully read paste payload
#[derive(Debug, Clone, PartialEq)]
pub enum PasteContent {
    Image(ImageBlob),
    Selection(Selection),
    Nothing,
}

/// Reads and writes selections through clipboard events
#[derive(Debug, Clone)]
pub struct ClipboardBridge {
    text_mime: String,
}

impl Default for ClipboardBridge {
    fn default() -> Self {
        Self::new("text/plain")
    }
}

impl ClipboardBridge {
    pub fn new(text_mime: impl Into<String>) -> Self {
        Self { text_mime: text_mime.into() }
    }

    pub fn text_mime(&self) -> &str {
        &self.text_mime
    }

    pub fn item_kind(&self, item: &ClipboardItem) -> ClipboardItemKind {
        ClipboardItemKind::classify(&item.mime, &self.text_mime)
    }

    /// Picks the paste source: the first image item, else the first plain text item.
    pub fn classify(&self, event: &ClipboardEvent) -> PasteSource {
        if let Some(item) = event.items().iter().find(|item| self.item_kind(item) == ClipboardItemKind::Image) {
            return PasteSource::Image(ImageBlob {
                mime: item.mime.clone(),
                bytes: item.bytes().to_vec(),
            });
        }
        event
            .items()
            .iter()
            .filter(|item| self.item_kind(item) == ClipboardItemKind::PlainTextSelection)
            .find_map(|item| item.as_text().ok().map(str::to_string))
            .map_or(PasteSource::Empty, PasteSource::Text)
    }

    /// Reads the paste payload. Text that isn't a serialized selection counts as nothing.
    pub fn read_paste(&self, event: &ClipboardEvent) -> PasteContent {
        match self.classify(event) {
            PasteSource::Image(blob) => PasteContent::Image(blob),
            PasteSource::Text(text) => self.parse_selection(&text).map_or(PasteContent::Nothing, PasteContent::Selection),
            PasteSource::Empty => PasteContent::Nothing,
        }
    }

    /// Parses clipboard text as a selection, logging text that isn't one
    pub fn parse_selection(&self, text: &str) -> Option<Selection> {
        match Selection::from_clipboard_text(text) {
            Ok(selection) => Some(selection),
            Err(err) => {
                log::warn!("Clipboard text is not a selection: {err}");
                None
            }
        }
    }

    /// Writes the selection into the event and suppresses the default action.
    ///
    /// Returns false, leaving the default action alone, if serializing fails.
    pub fn write_selection(&self, event: &mut ClipboardEvent, selection: &Selection) -> bool {
        match selection.to_clipboard_text() {
            Ok(text) => {
                event.set_data(&self.text_mime, text);
                event.prevent_default();
                true
            }
            Err(err) => {
                log::error!("Failed to serialize selection: {err}");
                false
            }
        }
    }
}
