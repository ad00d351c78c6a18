use std::path::Path;

use log::info;
use thiserror::Error;

use crate::buffer::Limits;
use crate::export::ExportError;
use crate::hex;
use crate::raster::{self, Fit, IngestError};

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ConvertOptions {
    /// Target grid size; `None` keeps the native resolution.
    pub target: Option<(u32, u32)>,
    pub fit: Fit,
    pub limits: Limits,
}

/// Converts an image file straight to a hex array file, without an editing
/// session. Returns the size of the exported grid.
pub fn image_to_hex(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> Result<(u32, u32), ConvertError> {
    let buffer = match options.target {
        Some((width, height)) => {
            raster::load_fitted(input, width, height, options.fit, options.limits)?
        }
        None => raster::load(input, options.limits)?,
    };

    hex::write(&buffer, output)?;

    let (width, height) = buffer.dimensions();
    info!(
        "Converted {} ({}x{}) to {}",
        input.display(),
        width,
        height,
        output.display()
    );
    Ok((width, height))
}
