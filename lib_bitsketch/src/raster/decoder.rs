use std::fmt;
use std::io;
use std::path::Path;
use std::str::FromStr;

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageError, ImageReader};
use log::{debug, error, info};
use thiserror::Error;

use crate::buffer::{BufferError, Limits, PixelBuffer};
use crate::color::Color;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Failed to read image file: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to decode image: {0}")]
    Decode(#[source] ImageError),
    #[error("Image does not fit the canvas limits: {0}")]
    Buffer(#[from] BufferError),
}

/// How a source image is mapped onto a grid of a different size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Fit {
    /// Keep the top-left region, pad uncovered cells with white.
    #[default]
    Crop,
    /// Nearest-neighbour resample, so no new colors appear.
    Resize,
}

impl fmt::Display for Fit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fit::Crop => f.write_str("crop"),
            Fit::Resize => f.write_str("resize"),
        }
    }
}

impl FromStr for Fit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "crop" => Ok(Fit::Crop),
            "resize" => Ok(Fit::Resize),
            other => Err(format!("unknown fit mode '{}': expected crop or resize", other)),
        }
    }
}

fn decode(path: &Path) -> Result<DynamicImage, IngestError> {
    info!("Loading image {}", path.display());

    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|err| {
            error!("Failed to open {}: {}", path.display(), err);
            IngestError::Io(err)
        })?;

    // Anything past opening is a parse failure, even a short read.
    let image = reader.decode().map_err(|err| {
        error!("Failed to decode {}: {}", path.display(), err);
        IngestError::Decode(err)
    })?;

    debug!(
        "Decoded {} as {:?} {}x{}",
        path.display(),
        image.color(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Decodes a PNG/JPEG/BMP file at native resolution, one source pixel per
/// grid cell.
pub fn load(path: &Path, limits: Limits) -> Result<PixelBuffer, IngestError> {
    let image = decode(path)?;
    Ok(from_dynamic(&image, limits)?)
}

/// Decodes a file onto a `width` x `height` grid.
pub fn load_fitted(
    path: &Path,
    width: u32,
    height: u32,
    fit: Fit,
    limits: Limits,
) -> Result<PixelBuffer, IngestError> {
    limits.check(width, height)?;
    let image = decode(path)?;

    let buffer = match fit {
        Fit::Resize => {
            from_dynamic(&image.resize_exact(width, height, FilterType::Nearest), limits)?
        }
        Fit::Crop => {
            let mut buffer = PixelBuffer::with_limits(width, height, Color::WHITE, limits)?;
            let source = image.to_rgb8();
            for (x, y, pixel) in source.enumerate_pixels() {
                if buffer.contains(x, y) {
                    buffer.set(x, y, Color::from(*pixel))?;
                }
            }
            buffer
        }
    };

    debug!(
        "Fitted {}x{} image onto {}x{} grid ({:?})",
        image.width(),
        image.height(),
        width,
        height,
        fit
    );
    Ok(buffer)
}

/// Converts a decoded image to a canvas. Alpha is dropped.
pub fn from_dynamic(image: &DynamicImage, limits: Limits) -> Result<PixelBuffer, BufferError> {
    let (width, height) = image.dimensions();
    limits.check(width, height)?;

    let pixels = image.to_rgb8().pixels().map(|&p| Color::from(p)).collect();
    PixelBuffer::from_pixels(width, height, pixels, limits)
}
