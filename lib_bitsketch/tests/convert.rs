mod common;

use common::{position_color, write_rgba_png};
use lib_bitsketch::convert::{image_to_hex, ConvertError, ConvertOptions};
use lib_bitsketch::raster;
use lib_bitsketch::{hex, Color, Fit, IngestError, Limits};
use tempfile::tempdir;

#[test]
fn test_convert_native_resolution() {
    let dir = tempdir().unwrap();
    let input = write_rgba_png(dir.path(), "sprite.png", 5, 3);
    let output = dir.path().join("sprite.txt");

    let size = image_to_hex(&input, &output, &ConvertOptions::default()).unwrap();
    assert_eq!(size, (5, 3));

    let expected = hex::export(&raster::load(&input, Limits::default()).unwrap());
    assert_eq!(std::fs::read_to_string(&output).unwrap(), expected);
}

#[test]
fn test_convert_cropped_target() {
    let dir = tempdir().unwrap();
    let input = write_rgba_png(dir.path(), "sprite.png", 6, 6);
    let output = dir.path().join("sprite.txt");
    let options = ConvertOptions {
        target: Some((2, 3)),
        fit: Fit::Crop,
        limits: Limits::default(),
    };

    assert_eq!(image_to_hex(&input, &output, &options).unwrap(), (2, 3));

    let cropped = raster::load_fitted(&input, 2, 3, Fit::Crop, Limits::default()).unwrap();
    assert_eq!(cropped.get(1, 2), Ok(position_color(1, 2)));
    assert_eq!(std::fs::read_to_string(&output).unwrap(), hex::export(&cropped));
}

#[test]
fn test_convert_resized_target() {
    let dir = tempdir().unwrap();
    let input = write_rgba_png(dir.path(), "sprite.png", 2, 2);
    let output = dir.path().join("sprite.h");
    let options = ConvertOptions {
        target: Some((4, 4)),
        fit: Fit::Resize,
        limits: Limits::default(),
    };

    assert_eq!(image_to_hex(&input, &output, &options).unwrap(), (4, 4));

    let text = std::fs::read_to_string(&output).unwrap();
    let resized = raster::load_fitted(&input, 4, 4, Fit::Resize, Limits::default()).unwrap();
    assert_eq!(text, hex::export(&resized));
    assert_eq!(text.lines().count(), 4 + 2);
    assert_ne!(resized.get(0, 0), Ok(Color::WHITE));
}

#[test]
fn test_convert_corrupt_input_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("broken.png");
    std::fs::write(&input, b"\x89PNG\r\n\x1a\n").unwrap();
    let output = dir.path().join("broken.txt");

    let result = image_to_hex(&input, &output, &ConvertOptions::default());
    assert!(matches!(
        result,
        Err(ConvertError::Ingest(IngestError::Decode(_)))
    ));
    assert!(!output.exists());
}
