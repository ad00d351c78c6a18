use std::io::{self, Write};

use lib_bitsketch::rgb565::{pack, to_hex_literal};
use lib_bitsketch::{Color, Editor, EditorError, HistoryError, PixelUpdate, SaveTarget};
use log::{debug, warn};
use thiserror::Error;

use crate::script::Command;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("line {line}: {source}")]
    Editor {
        line: usize,
        #[source]
        source: EditorError,
    },
    #[error("Failed to write session output: {0}")]
    Output(#[from] io::Error),
}

/// Drives an [`Editor`] from parsed script commands and reports every effect
/// on `out`, the way a UI would redraw after each call.
pub struct Session<W: Write> {
    editor: Editor,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(editor: Editor, out: W) -> Self {
        Self { editor, out }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn run(&mut self, commands: &[(usize, Command)]) -> Result<(), SessionError> {
        for (line, command) in commands {
            self.execute(*line, command)?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn execute(&mut self, line: usize, command: &Command) -> Result<(), SessionError> {
        debug!("line {}: {:?}", line, command);
        let editor_error = |source| SessionError::Editor { line, source };

        match command {
            Command::Paint { x, y, color } => {
                let update = self.editor.paint(*x, *y, *color);
                self.report_paint(*x, *y, update)?;
            }
            Command::Erase { x, y } => {
                let update = self.editor.erase(*x, *y);
                self.report_paint(*x, *y, update)?;
            }
            Command::Fill { color } => {
                let changed = self.editor.fill(*color);
                writeln!(self.out, "filled {} cells with {}", changed, color)?;
            }
            Command::Undo => {
                let result = self.editor.try_undo();
                self.report_history("undo", result)?;
            }
            Command::Redo => {
                let result = self.editor.try_redo();
                self.report_history("redo", result)?;
            }
            Command::Resize { width, height } => {
                self.editor.resize(*width, *height).map_err(editor_error)?;
                writeln!(self.out, "resized to {}x{}", width, height)?;
            }
            Command::Load { path } => {
                self.editor.load_image(path).map_err(editor_error)?;
                let (width, height) = self.editor.dimensions();
                writeln!(self.out, "loaded {} ({}x{})", path.display(), width, height)?;
            }
            Command::Save { path } => {
                let target = self.editor.save(path).map_err(editor_error)?;
                let kind = match target {
                    SaveTarget::HexArray => "hex array".to_string(),
                    SaveTarget::Raster(format) => format!("{:?} image", format),
                };
                writeln!(self.out, "saved {} as {}", path.display(), kind)?;
            }
            Command::Pixel { x, y } => match self.editor.pixel(*x, *y) {
                Some(color) => writeln!(
                    self.out,
                    "pixel ({}, {}) = {} [{}]",
                    x,
                    y,
                    color,
                    to_hex_literal(pack(color))
                )?,
                None => self.report_outside(*x, *y)?,
            },
        }

        Ok(())
    }

    fn report_paint(&mut self, x: i32, y: i32, update: Option<PixelUpdate>) -> io::Result<()> {
        match update {
            Some(PixelUpdate { x, y, color }) => {
                writeln!(self.out, "painted ({}, {}) {}", x, y, color)
            }
            None => self.report_outside(x, y),
        }
    }

    fn report_outside(&mut self, x: i32, y: i32) -> io::Result<()> {
        let (width, height) = self.editor.dimensions();
        warn!("({}, {}) is outside the {}x{} canvas", x, y, width, height);
        writeln!(self.out, "ignored ({}, {}): outside {}x{} canvas", x, y, width, height)
    }

    fn report_history(
        &mut self,
        action: &str,
        result: Result<PixelUpdate, HistoryError>,
    ) -> io::Result<()> {
        match result {
            Ok(PixelUpdate { x, y, color }) => {
                writeln!(self.out, "{} ({}, {}) -> {}", action, x, y, color)
            }
            Err(err) => writeln!(self.out, "{}", err),
        }
    }
}

/// Shorthand used by `main` to report the final canvas.
pub fn describe(editor: &Editor) -> String {
    let (width, height) = editor.dimensions();
    let painted = editor
        .buffer()
        .as_slice()
        .iter()
        .filter(|&&c| c != Color::WHITE)
        .count();
    format!("{}x{} canvas, {} non-white cells", width, height, painted)
}
