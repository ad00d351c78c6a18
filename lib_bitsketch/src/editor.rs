use std::path::Path;

use log::{debug, info};
use thiserror::Error;

use crate::buffer::{BufferError, PixelBuffer};
use crate::color::Color;
use crate::config::EditorConfig;
use crate::export::{self, ExportError, SaveTarget};
use crate::hex;
use crate::history::{ChangeLog, HistoryError, PixelChange};
use crate::raster::{self, Fit, IngestError};

#[derive(Error, Debug)]
pub enum EditorError {
    #[error(transparent)]
    Buffer(#[from] BufferError),
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// A cell that changed, for incremental redraw by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelUpdate {
    pub x: u32,
    pub y: u32,
    pub color: Color,
}

impl From<PixelChange> for PixelUpdate {
    fn from(change: PixelChange) -> Self {
        Self {
            x: change.x,
            y: change.y,
            color: change.color,
        }
    }
}

/// Owns one canvas and its history. All mutation goes through here.
///
/// Coordinates come in as signed grid positions straight from pointer input;
/// anything off the canvas is ignored rather than reported, so a drag that
/// overshoots the edge is harmless.
#[derive(Debug)]
pub struct Editor {
    buffer: PixelBuffer,
    history: ChangeLog,
}

impl Editor {
    pub fn new(config: &EditorConfig) -> Result<Self, EditorError> {
        let buffer = PixelBuffer::with_limits(
            config.default_width,
            config.default_height,
            Color::WHITE,
            config.limits(),
        )?;

        Ok(Self::with_buffer(buffer))
    }

    pub fn with_buffer(buffer: PixelBuffer) -> Self {
        Self {
            buffer,
            history: ChangeLog::new(),
        }
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn history(&self) -> &ChangeLog {
        &self.history
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.buffer.dimensions()
    }

    fn locate(&self, x: i32, y: i32) -> Option<(u32, u32)> {
        match (u32::try_from(x), u32::try_from(y)) {
            (Ok(gx), Ok(gy)) if self.buffer.contains(gx, gy) => Some((gx, gy)),
            _ => {
                debug!("Ignoring position ({}, {}) outside the canvas", x, y);
                None
            }
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let (x, y) = self.locate(x, y)?;
        self.buffer.get(x, y).ok()
    }

    pub fn paint(&mut self, x: i32, y: i32, color: Color) -> Option<PixelUpdate> {
        let (x, y) = self.locate(x, y)?;
        let previous = self.buffer.get(x, y).ok()?;
        self.buffer.set(x, y, color).ok()?;
        self.history.record_edit(x, y, previous);

        Some(PixelUpdate { x, y, color })
    }

    pub fn erase(&mut self, x: i32, y: i32) -> Option<PixelUpdate> {
        self.paint(x, y, Color::WHITE)
    }

    /// Paints every cell that differs from `color`, one history entry per
    /// cell. Returns how many cells changed.
    pub fn fill(&mut self, color: Color) -> usize {
        let changed: Vec<(u32, u32, Color)> = self
            .buffer
            .pixels()
            .filter(|&(_, _, current)| current != color)
            .collect();

        for &(x, y, previous) in &changed {
            if self.buffer.set(x, y, color).is_ok() {
                self.history.record_edit(x, y, previous);
            }
        }

        debug!("Filled {} cells with {}", changed.len(), color);
        changed.len()
    }

    pub fn undo(&mut self) -> Option<PixelUpdate> {
        self.try_undo().ok()
    }

    pub fn redo(&mut self) -> Option<PixelUpdate> {
        self.try_redo().ok()
    }

    pub fn try_undo(&mut self) -> Result<PixelUpdate, HistoryError> {
        self.history.undo(&mut self.buffer).map(PixelUpdate::from)
    }

    pub fn try_redo(&mut self) -> Result<PixelUpdate, HistoryError> {
        self.history.redo(&mut self.buffer).map(PixelUpdate::from)
    }

    /// Resizes the canvas, keeping the overlapping region. History is
    /// cleared since old coordinates may no longer exist.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), EditorError> {
        self.buffer = self.buffer.resize(width, height)?;
        self.history.clear();

        info!("Canvas resized to {}x{}", width, height);
        Ok(())
    }

    /// Replaces the canvas with an image at native resolution.
    pub fn load_image(&mut self, path: &Path) -> Result<(), EditorError> {
        let buffer = raster::load(path, self.buffer.limits())?;
        self.replace(buffer);
        Ok(())
    }

    /// Replaces the canvas with an image mapped onto a `width` x `height` grid.
    pub fn load_image_fitted(
        &mut self,
        path: &Path,
        width: u32,
        height: u32,
        fit: Fit,
    ) -> Result<(), EditorError> {
        let buffer = raster::load_fitted(path, width, height, fit, self.buffer.limits())?;
        self.replace(buffer);
        Ok(())
    }

    fn replace(&mut self, buffer: PixelBuffer) {
        let (width, height) = buffer.dimensions();
        self.buffer = buffer;
        self.history.clear();
        info!("Canvas replaced with {}x{} image", width, height);
    }

    pub fn export_hex(&self) -> String {
        hex::export(&self.buffer)
    }

    pub fn write_hex(&self, path: &Path) -> Result<(), EditorError> {
        Ok(hex::write(&self.buffer, path)?)
    }

    pub fn export_image(&self, path: &Path) -> Result<(), EditorError> {
        Ok(raster::write(&self.buffer, path)?)
    }

    /// Saves as a hex array or raster image depending on the extension.
    pub fn save(&self, path: &Path) -> Result<SaveTarget, EditorError> {
        Ok(export::save(&self.buffer, path)?)
    }
}
