use std::{fmt::Display, str::FromStr};

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Result, SelectionError};

lazy_static::lazy_static! {
    static ref HEX_REGEX: Regex = Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap();
    static ref RGBA_REGEX: Regex = Regex::new(r"^(?i:rgba?)\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*(\d*\.?\d+)\s*)?\)$").unwrap();
}

/// RGBA pixel color.
///
/// The textual form is what travels through the clipboard: `#rrggbb` for opaque
/// colors, `#rrggbbaa` for translucent ones and `rgba(0, 0, 0, 0)` for
/// [`Color::TRANSPARENT`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// The "no paint" sentinel. Erase writes it, paste never does.
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 0xFF }
    }

    pub fn is_transparent(&self) -> bool {
        *self == Color::TRANSPARENT
    }

    pub fn to_hex(&self) -> String {
        if self.a == 0xFF {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Parses `#rgb`, `#rrggbb`, `#rrggbbaa` or `rgba(r, g, b, a)` with a float alpha.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::InvalidColor`] if the text is none of those forms.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if let Some(cap) = HEX_REGEX.captures(text) {
            return Ok(Self::from_hex_digits(&cap[1]));
        }
        if let Some(cap) = RGBA_REGEX.captures(text) {
            let channel = |idx: usize| -> Result<u8> { cap[idx].parse::<u8>().map_err(|_| SelectionError::invalid_color(text)) };
            let alpha = match cap.get(4) {
                Some(a) => {
                    let a: f32 = a.as_str().parse().map_err(|_| SelectionError::invalid_color(text))?;
                    if !(0.0..=1.0).contains(&a) {
                        return Err(SelectionError::invalid_color(text));
                    }
                    (a * 255.0).round() as u8
                }
                None => 0xFF,
            };
            return Ok(Color::new(channel(1)?, channel(2)?, channel(3)?, alpha));
        }
        Err(SelectionError::invalid_color(text))
    }

    // digits are pre-validated by HEX_REGEX
    fn from_hex_digits(digits: &str) -> Self {
        let nibble = |c: u8| (c as char).to_digit(16).unwrap_or(0) as u8;
        let bytes = digits.as_bytes();
        match bytes.len() {
            3 => Color::rgb(nibble(bytes[0]) * 0x11, nibble(bytes[1]) * 0x11, nibble(bytes[2]) * 0x11),
            _ => {
                let byte = |i: usize| (nibble(bytes[i]) << 4) | nibble(bytes[i + 1]);
                let a = if bytes.len() == 8 { byte(6) } else { 0xFF };
                Color::new(byte(0), byte(2), byte(4), a)
            }
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_transparent() {
            write!(f, "rgba(0, 0, 0, 0)")
        } else {
            write!(f, "{}", self.to_hex())
        }
    }
}

impl FromStr for Color {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self> {
        Color::parse(s)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from(value: (u8, u8, u8)) -> Self {
        Color::rgb(value.0, value.1, value.2)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from(value: (u8, u8, u8, u8)) -> Self {
        Color::new(value.0, value.1, value.2, value.3)
    }
}

impl From<[u8; 4]> for Color {
    fn from(value: [u8; 4]) -> Self {
        Color::new(value[0], value[1], value[2], value[3])
    }
}

impl From<Color> for [u8; 4] {
    fn from(value: Color) -> [u8; 4] {
        [value.r, value.g, value.b, value.a]
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Color::parse(&text).map_err(serde::de::Error::custom)
    }
}
