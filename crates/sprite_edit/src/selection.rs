//! The selection entity
//!
//! A selection is an ordered list of addressed pixels. Order is insertion
//! order and survives the clipboard round trip, so a replayed paste writes
//! in exactly the same sequence as the live one.

use serde::{Deserialize, Serialize};

use crate::{Color, Frame, Position, Result};

/// One addressed pixel of a selection or replay entry.
///
/// `color == None` means "no color data"; `Some(Color::TRANSPARENT)` is the
/// explicit "no paint" sentinel. Neither is ever painted by a paste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pixel {
    pub col: i32,
    pub row: i32,
    #[serde(default)]
    pub color: Option<Color>,
}

impl Pixel {
    pub fn new(col: i32, row: i32, color: impl Into<Option<Color>>) -> Self {
        Self { col, row, color: color.into() }
    }

    /// False for absent colors and for the transparent sentinel
    pub fn is_paintable(&self) -> bool {
        matches!(self.color, Some(c) if !c.is_transparent())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pixels: Vec<Pixel>,
    #[serde(default)]
    has_pasted_content: bool,
}

impl Selection {
    pub fn new(pixels: Vec<Pixel>) -> Self {
        Self {
            pixels,
            has_pasted_content: false,
        }
    }

    /// All addresses of the inclusive rectangle spanned by `anchor` and `lead`, row by row.
    pub fn from_rectangle(anchor: impl Into<Position>, lead: impl Into<Position>) -> Self {
        let (anchor, lead) = (anchor.into(), lead.into());
        let min = anchor.min(lead);
        let max = anchor.max(lead);
        let pixels = (min.y..=max.y)
            .flat_map(|row| (min.x..=max.x).map(move |col| Pixel::new(col, row, None)))
            .collect();
        Self::new(pixels)
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn has_pasted_content(&self) -> bool {
        self.has_pasted_content
    }

    pub fn set_pasted_content(&mut self, has_pasted_content: bool) {
        self.has_pasted_content = has_pasted_content;
    }

    /// Translates every address, content stays the same.
    ///
    /// Returns false and leaves the selection untouched if any address would overflow.
    pub fn move_by(&mut self, col_delta: i32, row_delta: i32) -> bool {
        let moved: Option<Vec<(i32, i32)>> = self
            .pixels
            .iter()
            .map(|pixel| Some((pixel.col.checked_add(col_delta)?, pixel.row.checked_add(row_delta)?)))
            .collect();
        let Some(moved) = moved else {
            return false;
        };
        for (pixel, (col, row)) in self.pixels.iter_mut().zip(moved) {
            pixel.col = col;
            pixel.row = row;
        }
        true
    }

    /// Re-samples every color from the frame. Addresses outside the frame become transparent.
    pub fn fill_from_frame(&mut self, frame: &dyn Frame) {
        for pixel in &mut self.pixels {
            pixel.color = Some(frame.get_pixel(pixel.col, pixel.row).unwrap_or(Color::TRANSPARENT));
        }
        self.has_pasted_content = true;
    }

    pub fn reset(&mut self) {
        self.pixels.clear();
        self.has_pasted_content = false;
    }

    /// Serializes into the plain text clipboard format
    pub fn to_clipboard_text(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses the plain text clipboard format
    ///
    /// # Errors
    ///
    /// Returns [`crate::SelectionError::InvalidPayload`] if the text isn't a serialized selection.
    pub fn from_clipboard_text(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

impl FromIterator<Pixel> for Selection {
    fn from_iter<T: IntoIterator<Item = Pixel>>(iter: T) -> Self {
        Selection::new(iter.into_iter().collect())
    }
}
