//! Pixel storage the selection code reads from and writes to.
//!
//! The editor's real frame storage lives elsewhere; everything here only
//! needs the [`Frame`] contract. [`PixelFrame`] is a plain in-memory
//! implementation for hosts without their own storage and for tests.

use crate::Color;

/// A single drawable frame
pub trait Frame {
    fn width(&self) -> i32;

    fn height(&self) -> i32;

    fn contains(&self, col: i32, row: i32) -> bool {
        col >= 0 && row >= 0 && col < self.width() && row < self.height()
    }

    /// Color at the address, `None` if the address is outside the frame
    fn get_pixel(&self, col: i32, row: i32) -> Option<Color>;

    /// Writes a color. Writes outside the frame are ignored.
    fn set_pixel(&mut self, col: i32, row: i32, color: Color);
}

/// Row-major RGBA frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelFrame {
    width: i32,
    height: i32,
    pixels: Vec<Color>,
}

impl PixelFrame {
    /// Creates a frame filled with [`Color::TRANSPARENT`]
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, Color::TRANSPARENT)
    }

    pub fn filled(width: i32, height: i32, color: Color) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            pixels: vec![color; buffer_len(width, height)],
        }
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if self.contains(col, row) {
            Some(row as usize * self.width as usize + col as usize)
        } else {
            None
        }
    }
}

/// Pixel count of a `width` x `height` frame, computed without `i32` overflow
fn buffer_len(width: i32, height: i32) -> usize {
    width.max(0) as usize * height.max(0) as usize
}

impl Frame for PixelFrame {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn get_pixel(&self, col: i32, row: i32) -> Option<Color> {
        self.index(col, row).map(|i| self.pixels[i])
    }

    fn set_pixel(&mut self, col: i32, row: i32, color: Color) {
        if let Some(i) = self.index(col, row) {
            self.pixels[i] = color;
        }
    }
}
