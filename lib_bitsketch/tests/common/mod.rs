#![allow(dead_code)]

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use lib_bitsketch::{Color, PixelBuffer};

pub const PALETTE: [Color; 6] = [
    Color::WHITE,
    Color::BLACK,
    Color::RED,
    Color::GREEN,
    Color::BLUE,
    Color::new(0x12, 0x34, 0x56),
];

/// A buffer whose every cell has a distinct, position-derived color.
pub fn gradient(width: u32, height: u32) -> PixelBuffer {
    let mut buffer = PixelBuffer::create(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            buffer.set(x, y, position_color(x, y)).unwrap();
        }
    }
    buffer
}

pub fn position_color(x: u32, y: u32) -> Color {
    Color::new((x * 16) as u8, (y * 16) as u8, ((x + y) * 8) as u8)
}

/// Writes an RGBA PNG whose color channels follow `position_color` and whose
/// alpha is deliberately not opaque.
pub fn write_rgba_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    let image = RgbaImage::from_fn(width, height, |x, y| {
        let c = position_color(x, y);
        Rgba([c.r, c.g, c.b, 40])
    });
    image.save(&path).unwrap();
    path
}
