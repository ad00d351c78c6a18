use std::fs;
use std::path::Path;

use log::{debug, error, info};

use crate::buffer::PixelBuffer;
use crate::constants::{ARRAY_CLOSE, ARRAY_OPEN};
use crate::export::ExportError;
use crate::rgb565::{pack, to_hex_literal};

/// Serializes the canvas as a `PROGMEM` array of RGB565 literals.
///
/// One output line per canvas row, top to bottom, each ending with a
/// trailing comma. Firmware build steps consume this verbatim, so the layout
/// must stay byte-for-byte stable.
pub fn export(buffer: &PixelBuffer) -> String {
    let (width, height) = buffer.dimensions();
    // "0xffff, " per pixel plus the fixed framing
    let mut out = String::with_capacity(
        ARRAY_OPEN.len() + ARRAY_CLOSE.len() + (width as usize * 8 + 1) * height as usize,
    );

    out.push_str(ARRAY_OPEN);
    for row in buffer.rows() {
        let literals: Vec<String> = row.iter().map(|&c| to_hex_literal(pack(c))).collect();
        out.push_str(&literals.join(", "));
        out.push_str(",\n");
    }
    out.push_str(ARRAY_CLOSE);

    debug!("Exported {}x{} canvas to {} bytes", width, height, out.len());
    out
}

pub fn write(buffer: &PixelBuffer, path: &Path) -> Result<(), ExportError> {
    fs::write(path, export(buffer)).map_err(|err| {
        error!("Failed to write hex array to {}: {}", path.display(), err);
        ExportError::Io(err)
    })?;

    info!("Saved hex array to {}", path.display());
    Ok(())
}
