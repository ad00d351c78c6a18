//! 16-bit 5-6-5 color packing as consumed by embedded display drivers.

use crate::color::Color;

/// Packs a color into RGB565, dropping the low 3 bits of red and blue and the
/// low 2 bits of green.
pub fn pack(color: Color) -> u16 {
    ((color.r as u16 & 0xF8) << 8) | ((color.g as u16 & 0xFC) << 3) | (color.b as u16 >> 3)
}

/// Expands an RGB565 value back to 8 bits per channel. Dropped bits come back
/// as zero, so `pack(unpack(v)) == v`.
pub fn unpack(packed: u16) -> Color {
    Color::new(
        ((packed >> 8) & 0xF8) as u8,
        ((packed >> 3) & 0xFC) as u8,
        ((packed & 0x1F) << 3) as u8,
    )
}

/// The color a 565 panel will actually show for `color`.
pub fn quantize(color: Color) -> Color {
    unpack(pack(color))
}

/// Lowercase, zero-padded, `0x`-prefixed literal, e.g. `0x07e0`.
pub fn to_hex_literal(packed: u16) -> String {
    format!("0x{:04x}", packed)
}
