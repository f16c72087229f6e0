//! Replay entries for the history service
//!
//! Selection edits aren't recorded as frame snapshots. Each erase or paste
//! produces a [`ReplayEntry`] holding the exact pixel list it touched; undo/redo
//! re-applies the entry against whatever frame is active at that time.

use serde::{Deserialize, Serialize};

use crate::{Color, Frame, Pixel};

/// Serializable replay operation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ReplayEntry {
    /// Paint every pixel with a paintable color
    #[serde(rename = "REPLAY_PASTE")]
    Paste { pixels: Vec<Pixel> },

    /// Write the transparent sentinel to every address
    #[serde(rename = "REPLAY_ERASE")]
    Erase { pixels: Vec<Pixel> },
}

impl ReplayEntry {
    /// Snapshot of `pixels` for a paste; later changes to the source don't leak in
    pub fn paste(pixels: &[Pixel]) -> Self {
        ReplayEntry::Paste { pixels: pixels.to_vec() }
    }

    pub fn erase(pixels: &[Pixel]) -> Self {
        ReplayEntry::Erase { pixels: pixels.to_vec() }
    }

    /// Get a description of this operation for display
    pub fn get_description(&self) -> String {
        match self {
            ReplayEntry::Paste { .. } => "Paste selection".to_string(),
            ReplayEntry::Erase { .. } => "Erase selection".to_string(),
        }
    }

    pub fn pixels(&self) -> &[Pixel] {
        match self {
            ReplayEntry::Paste { pixels } | ReplayEntry::Erase { pixels } => pixels,
        }
    }

    /// Re-applies the mutation to `frame`
    pub fn apply(&self, frame: &mut dyn Frame) {
        match self {
            ReplayEntry::Paste { pixels } => paste_pixels(frame, pixels),
            ReplayEntry::Erase { pixels } => erase_pixels(frame, pixels),
        }
    }
}

/// Writes every paintable pixel. Absent and transparent colors leave the frame untouched.
pub(crate) fn paste_pixels(frame: &mut dyn Frame, pixels: &[Pixel]) {
    for pixel in pixels.iter().filter(|pixel| pixel.is_paintable()) {
        if let Some(color) = pixel.color {
            frame.set_pixel(pixel.col, pixel.row, color);
        }
    }
}

/// Writes the transparent sentinel regardless of the recorded color
pub(crate) fn erase_pixels(frame: &mut dyn Frame, pixels: &[Pixel]) {
    for pixel in pixels {
        frame.set_pixel(pixel.col, pixel.row, Color::TRANSPARENT);
    }
}

/// Subsystem that produced a history record; the history service routes replays back by it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Originator {
    Selection,
}

/// Replay-type operation record handed to the history service
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub originator: Originator,
    pub entry: ReplayEntry,
}

impl HistoryRecord {
    pub fn selection(entry: ReplayEntry) -> Self {
        Self {
            originator: Originator::Selection,
            entry,
        }
    }
}
