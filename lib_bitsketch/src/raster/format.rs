use std::path::Path;

use image::ImageFormat;

use crate::export::lowercase_extension;

/// Raster formats the editor reads and writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RasterFormat {
    Png,
    Jpeg,
    Bmp,
}

impl RasterFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(RasterFormat::Png),
            "jpg" | "jpeg" => Some(RasterFormat::Jpeg),
            "bmp" => Some(RasterFormat::Bmp),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        lowercase_extension(path).and_then(|ext| Self::from_extension(&ext))
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            RasterFormat::Png => ImageFormat::Png,
            RasterFormat::Jpeg => ImageFormat::Jpeg,
            RasterFormat::Bmp => ImageFormat::Bmp,
        }
    }
}
