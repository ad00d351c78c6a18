use lib_bitsketch::rgb565::{pack, quantize, to_hex_literal, unpack};
use lib_bitsketch::Color;

#[test]
fn test_pack_primaries() {
    assert_eq!(pack(Color::new(0, 0, 0)), 0x0000);
    assert_eq!(pack(Color::new(255, 255, 255)), 0xFFFF);
    assert_eq!(pack(Color::new(255, 0, 0)), 0xF800);
    assert_eq!(pack(Color::new(0, 255, 0)), 0x07E0);
    assert_eq!(pack(Color::new(0, 0, 255)), 0x001F);
}

#[test]
fn test_pack_discards_low_bits() {
    assert_eq!(pack(Color::new(0x07, 0x03, 0x07)), 0x0000);
    assert_eq!(pack(Color::new(0x08, 0x04, 0x08)), 0x0821);
    assert_eq!(pack(Color::new(0x12, 0x34, 0x56)), 0x11AA);
}

#[test]
fn test_hex_literal_is_padded_lowercase() {
    assert_eq!(to_hex_literal(0), "0x0000");
    assert_eq!(to_hex_literal(0x07E0), "0x07e0");
    assert_eq!(to_hex_literal(0xABCD), "0xabcd");
}

#[test]
fn test_unpack_inverts_pack_on_every_value() {
    for value in 0..=u16::MAX {
        assert_eq!(pack(unpack(value)), value);
    }
}

#[test]
fn test_quantize_is_idempotent() {
    let color = Color::new(0x9D, 0x6B, 0x2F);
    let once = quantize(color);
    assert_eq!(once, Color::new(0x98, 0x68, 0x28));
    assert_eq!(quantize(once), once);
}
