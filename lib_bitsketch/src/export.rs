use std::io;
use std::path::Path;

use image::ImageError;
use log::debug;
use thiserror::Error;

use crate::buffer::PixelBuffer;
use crate::constants::HEX_EXTENSIONS;
use crate::hex;
use crate::raster::{self, RasterFormat};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to encode image: {0}")]
    Encode(#[source] ImageError),
    #[error("Unsupported file extension: '{0}'")]
    UnsupportedExtension(String),
}

impl From<ImageError> for ExportError {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::IoError(err) => ExportError::Io(err),
            other => ExportError::Encode(other),
        }
    }
}

/// Where a save request ends up, picked from the file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveTarget {
    HexArray,
    Raster(RasterFormat),
}

impl SaveTarget {
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        let ext = lowercase_extension(path)
            .ok_or_else(|| ExportError::UnsupportedExtension(String::new()))?;

        if HEX_EXTENSIONS.contains(&ext.as_str()) {
            return Ok(SaveTarget::HexArray);
        }

        RasterFormat::from_extension(&ext)
            .map(SaveTarget::Raster)
            .ok_or(ExportError::UnsupportedExtension(ext))
    }
}

pub(crate) fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

/// Saves the canvas as a hex array or a raster image depending on `path`.
pub fn save(buffer: &PixelBuffer, path: &Path) -> Result<SaveTarget, ExportError> {
    let target = SaveTarget::from_path(path)?;
    debug!("Saving {} as {:?}", path.display(), target);

    match target {
        SaveTarget::HexArray => hex::write(buffer, path)?,
        SaveTarget::Raster(format) => raster::encoder::write_as(buffer, path, format)?,
    }

    Ok(target)
}
