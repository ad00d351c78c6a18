use std::fmt;
use std::str::FromStr;

use image::{Rgb, Rgba};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("invalid hex color '{0}': expected 6 hex digits")]
    InvalidHex(String),
    #[error("invalid channel list '{0}': expected r,g,b with values 0-255")]
    InvalidChannels(String),
}

/// An opaque 24-bit color, one byte per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Accepts `#rrggbb`, `rrggbb` or `r,g,b`.
impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.contains(',') {
            let channels = s
                .split(',')
                .map(|part| part.trim().parse::<u8>())
                .collect::<Result<Vec<u8>, _>>()
                .map_err(|_| ColorParseError::InvalidChannels(s.to_string()))?;

            return match channels[..] {
                [r, g, b] => Ok(Color::new(r, g, b)),
                _ => Err(ColorParseError::InvalidChannels(s.to_string())),
            };
        }

        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex(s.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ColorParseError::InvalidHex(s.to_string()))
        };

        Ok(Color::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl From<Rgb<u8>> for Color {
    fn from(pixel: Rgb<u8>) -> Self {
        let [r, g, b] = pixel.0;
        Color::new(r, g, b)
    }
}

/// Alpha is dropped, not blended.
impl From<Rgba<u8>> for Color {
    fn from(pixel: Rgba<u8>) -> Self {
        let [r, g, b, _] = pixel.0;
        Color::new(r, g, b)
    }
}

impl From<Color> for Rgb<u8> {
    fn from(color: Color) -> Self {
        Rgb([color.r, color.g, color.b])
    }
}
