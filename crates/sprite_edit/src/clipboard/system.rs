//! OS clipboard adapter built on `arboard`

use std::io::Cursor;

use arboard::Clipboard;
use image::{ImageFormat, RgbaImage};

use super::{ClipboardEvent, ClipboardItem};
use crate::{Result, SelectionError};

/// Produces clipboard events from the OS clipboard and writes copy results back
pub struct SystemClipboard {
    clipboard: Clipboard,
    text_mime: String,
}

impl SystemClipboard {
    /// # Errors
    ///
    /// Returns [`SelectionError::ClipboardAccess`] if no clipboard is available.
    pub fn new(text_mime: impl Into<String>) -> Result<Self> {
        let clipboard = Clipboard::new().map_err(SelectionError::clipboard_access)?;
        Ok(Self {
            clipboard,
            text_mime: text_mime.into(),
        })
    }

    /// Paste event exposing the current clipboard content.
    ///
    /// An image on the clipboard comes as PNG encoded `image/png` item,
    /// text as an item in the configured text slot.
    pub fn paste_event(&mut self) -> ClipboardEvent {
        let mut items = Vec::new();
        match self.clipboard.get_image() {
            Ok(img) => match encode_png(img.width, img.height, img.bytes.into_owned()) {
                Ok(png) => items.push(ClipboardItem::binary("image/png", png)),
                Err(err) => log::error!("Error reading clipboard image: {err}"),
            },
            Err(err) => log::debug!("No image on clipboard: {err}"),
        }
        match self.clipboard.get_text() {
            Ok(text) => items.push(ClipboardItem::text(self.text_mime.clone(), text)),
            Err(err) => log::debug!("No text on clipboard: {err}"),
        }
        ClipboardEvent::with_items(items)
    }

    /// Empty event for a copy or cut
    pub fn copy_event(&self) -> ClipboardEvent {
        ClipboardEvent::new()
    }

    /// Writes what a handled copy or cut put into the event.
    ///
    /// Nothing is written if the default action wasn't suppressed.
    pub fn flush(&mut self, event: &ClipboardEvent) -> Result<()> {
        if !event.is_default_prevented() {
            return Ok(());
        }
        if let Some(text) = event.get_written_text(&self.text_mime) {
            self.clipboard.set_text(text.to_string()).map_err(SelectionError::clipboard_access)?;
        }
        Ok(())
    }
}

fn encode_png(width: usize, height: usize, rgba: Vec<u8>) -> Result<Vec<u8>> {
    let image = RgbaImage::from_raw(width as u32, height as u32, rgba).ok_or_else(|| SelectionError::clipboard_access("clipboard image has wrong size"))?;
    let mut png = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(SelectionError::clipboard_access)?;
    Ok(png)
}
