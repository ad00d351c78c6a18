mod common;

use common::gradient;
use lib_bitsketch::{BufferError, Color, Limits, PixelBuffer};

#[test]
fn test_create_is_all_white() {
    for (width, height) in [(1, 1), (3, 7), (50, 50), (128, 1)] {
        let buffer = PixelBuffer::create(width, height).unwrap();
        assert_eq!(buffer.dimensions(), (width, height));
        assert!(buffer.pixels().all(|(_, _, color)| color == Color::WHITE));
        assert_eq!(buffer.pixels().count(), (width * height) as usize);
    }
}

#[test]
fn test_create_rejects_invalid_dimensions() {
    assert_eq!(
        PixelBuffer::create(0, 5),
        Err(BufferError::InvalidDimension {
            width: 0,
            height: 5,
            max: 32767
        })
    );
    assert!(PixelBuffer::create(5, 0).is_err());
    assert!(PixelBuffer::create(32768, 1).is_err());

    let limits = Limits::new(16);
    assert!(PixelBuffer::with_limits(16, 16, Color::BLACK, limits).is_ok());
    assert!(PixelBuffer::with_limits(17, 1, Color::BLACK, limits).is_err());
}

#[test]
fn test_get_set_bounds() {
    let mut buffer = PixelBuffer::create(4, 3).unwrap();

    buffer.set(3, 2, Color::RED).unwrap();
    assert_eq!(buffer.get(3, 2), Ok(Color::RED));

    assert_eq!(
        buffer.get(4, 0),
        Err(BufferError::OutOfBounds {
            x: 4,
            y: 0,
            width: 4,
            height: 3
        })
    );
    assert!(buffer.set(0, 3, Color::RED).is_err());
}

#[test]
fn test_resize_shrink_keeps_top_left() {
    let buffer = gradient(4, 4);
    let resized = buffer.resize(2, 2).unwrap();

    assert_eq!(resized.dimensions(), (2, 2));
    for (x, y, color) in resized.pixels() {
        assert_eq!(color, buffer.get(x, y).unwrap());
    }
}

#[test]
fn test_resize_grow_pads_with_white() {
    let buffer = gradient(2, 2);
    let resized = buffer.resize(4, 4).unwrap();

    for (x, y, color) in resized.pixels() {
        if x < 2 && y < 2 {
            assert_eq!(color, buffer.get(x, y).unwrap());
        } else {
            assert_eq!(color, Color::WHITE);
        }
    }
}

#[test]
fn test_resize_mixed_axes() {
    let buffer = gradient(5, 2);
    let resized = buffer.resize(3, 4).unwrap();

    assert_eq!(resized.get(2, 1), buffer.get(2, 1));
    assert_eq!(resized.get(2, 3), Ok(Color::WHITE));
    assert!(buffer.resize(0, 4).is_err());
}

#[test]
fn test_resize_respects_buffer_limits() {
    let buffer = PixelBuffer::with_limits(4, 4, Color::WHITE, Limits::new(8)).unwrap();
    assert!(buffer.resize(8, 8).is_ok());
    assert!(buffer.resize(9, 8).is_err());
}

#[test]
fn test_fill_and_rows() {
    let mut buffer = PixelBuffer::create(3, 2).unwrap();
    buffer.fill(Color::BLUE);

    let rows: Vec<&[Color]> = buffer.rows().collect();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.len() == 3));
    assert!(buffer.as_slice().iter().all(|&c| c == Color::BLUE));
}

#[test]
fn test_pixels_are_row_major() {
    let buffer = gradient(3, 2);
    let coords: Vec<(u32, u32)> = buffer.pixels().map(|(x, y, _)| (x, y)).collect();
    assert_eq!(coords, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
}

#[test]
fn test_quantized_drops_low_bits() {
    let mut buffer = PixelBuffer::create(1, 1).unwrap();
    buffer.set(0, 0, Color::new(0x0F, 0x0F, 0x0F)).unwrap();

    let quantized = buffer.quantized();
    assert_eq!(quantized.get(0, 0), Ok(Color::new(0x08, 0x0C, 0x08)));
    // source untouched
    assert_eq!(buffer.get(0, 0), Ok(Color::new(0x0F, 0x0F, 0x0F)));
}

#[test]
fn test_from_pixels_checks_length() {
    let pixels = vec![Color::RED; 5];
    assert!(PixelBuffer::from_pixels(2, 3, pixels, Limits::default()).is_err());
    let pixels = vec![Color::RED; 6];
    assert!(PixelBuffer::from_pixels(2, 3, pixels, Limits::default()).is_ok());
}
