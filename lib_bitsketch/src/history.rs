use log::debug;
use thiserror::Error;

use crate::buffer::{BufferError, PixelBuffer};
use crate::color::Color;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("nothing to undo")]
    NothingToUndo,
    #[error("nothing to redo")]
    NothingToRedo,
    #[error("history does not match the canvas: {0}")]
    Buffer(#[from] BufferError),
}

/// A single pixel delta: the color that sat at `(x, y)` before the change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelChange {
    pub x: u32,
    pub y: u32,
    pub color: Color,
}

/// Linear undo/redo history made of per-pixel deltas.
///
/// Memory grows with the number of recorded edits, never with the canvas
/// size. Applying a change swaps the stored color with the one currently in
/// the buffer, so undo and redo are exact inverses even when an edit hits
/// the same coordinate repeatedly.
#[derive(Debug, Default)]
pub struct ChangeLog {
    undo_stack: Vec<PixelChange>,
    redo_stack: Vec<PixelChange>,
}

impl ChangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a fresh edit. Any redo history is discarded.
    pub fn record_edit(&mut self, x: u32, y: u32, previous: Color) {
        self.undo_stack.push(PixelChange {
            x,
            y,
            color: previous,
        });
        self.redo_stack.clear();
    }

    /// Reverts the most recent edit. Returns the coordinate and the color
    /// now in the buffer.
    pub fn undo(&mut self, buffer: &mut PixelBuffer) -> Result<PixelChange, HistoryError> {
        let change = self.undo_stack.pop().ok_or(HistoryError::NothingToUndo)?;

        match Self::swap(change, buffer) {
            Ok(inverse) => {
                self.redo_stack.push(inverse);
                debug!("Undo at ({}, {}) -> {}", change.x, change.y, change.color);
                Ok(change)
            }
            Err(err) => {
                self.undo_stack.push(change);
                Err(err.into())
            }
        }
    }

    /// Re-applies the most recently undone edit.
    pub fn redo(&mut self, buffer: &mut PixelBuffer) -> Result<PixelChange, HistoryError> {
        let change = self.redo_stack.pop().ok_or(HistoryError::NothingToRedo)?;

        match Self::swap(change, buffer) {
            Ok(inverse) => {
                self.undo_stack.push(inverse);
                debug!("Redo at ({}, {}) -> {}", change.x, change.y, change.color);
                Ok(change)
            }
            Err(err) => {
                self.redo_stack.push(change);
                Err(err.into())
            }
        }
    }

    /// Writes `change.color` into the buffer and returns the change that
    /// would restore the overwritten color.
    fn swap(change: PixelChange, buffer: &mut PixelBuffer) -> Result<PixelChange, BufferError> {
        let current = buffer.get(change.x, change.y)?;
        buffer.set(change.x, change.y, change.color)?;

        Ok(PixelChange {
            color: current,
            ..change
        })
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
