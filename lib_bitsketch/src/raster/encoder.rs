use std::path::Path;

use image::{Rgb, RgbImage};
use log::{error, info};

use super::format::RasterFormat;
use crate::buffer::PixelBuffer;
use crate::export::{lowercase_extension, ExportError};

/// Copies the canvas into an 8-bit RGB image without any re-quantization.
pub fn to_rgb_image(buffer: &PixelBuffer) -> RgbImage {
    let (width, height) = buffer.dimensions();
    let pixels = buffer.as_slice();

    RgbImage::from_fn(width, height, |x, y| {
        Rgb::from(pixels[y as usize * width as usize + x as usize])
    })
}

/// Encodes the canvas to `path`, picking the format from its extension.
pub fn write(buffer: &PixelBuffer, path: &Path) -> Result<(), ExportError> {
    let format = RasterFormat::from_path(path).ok_or_else(|| {
        ExportError::UnsupportedExtension(lowercase_extension(path).unwrap_or_default())
    })?;

    write_as(buffer, path, format)
}

pub fn write_as(buffer: &PixelBuffer, path: &Path, format: RasterFormat) -> Result<(), ExportError> {
    to_rgb_image(buffer)
        .save_with_format(path, format.image_format())
        .map_err(|err| {
            error!("Failed to save image to {}: {}", path.display(), err);
            ExportError::from(err)
        })?;

    info!("Saved {:?} image to {}", format, path.display());
    Ok(())
}
