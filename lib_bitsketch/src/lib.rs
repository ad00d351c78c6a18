pub mod buffer;
pub mod color;
pub mod config;
pub mod constants;
pub mod convert;
pub mod editor;
pub mod export;
pub mod hex;
pub mod history;
pub mod raster;
pub mod rgb565;

use log::*;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

pub use crate::buffer::{BufferError, Limits, PixelBuffer};
pub use crate::color::Color;
pub use crate::config::EditorConfig;
pub use crate::editor::{Editor, EditorError, PixelUpdate};
pub use crate::export::{save, ExportError, SaveTarget};
pub use crate::history::{ChangeLog, HistoryError, PixelChange};
pub use crate::raster::{Fit, IngestError};

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Can't create log file: {0}")]
    LogFile(#[from] io::Error),
    #[error("Logger already initialized")]
    AlreadyInitialized(#[from] SetLoggerError),
}

/// Sets up `env_logger` with a `[LEVEL file:line] message` format, writing to
/// stderr or to `log_file` when given.
pub fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> Result<(), LoggingError> {
    let mut builder = env_logger::Builder::new();

    if let Some(path) = log_file {
        let target = Box::new(File::create(path)?);
        builder.target(env_logger::Target::Pipe(target));
    }

    builder
        .filter(None, level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .try_init()?;

    Ok(())
}
