use std::path::PathBuf;
use std::str::FromStr;

use lib_bitsketch::color::ColorParseError;
use lib_bitsketch::Color;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: '{command}' expects {expected}")]
    WrongArguments {
        line: usize,
        command: String,
        expected: &'static str,
    },
    #[error("line {line}: invalid number '{value}'")]
    InvalidNumber { line: usize, value: String },
    #[error("line {line}: {source}")]
    InvalidColor {
        line: usize,
        #[source]
        source: ColorParseError,
    },
}

/// One line of an edit script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Paint { x: i32, y: i32, color: Color },
    Erase { x: i32, y: i32 },
    Fill { color: Color },
    Undo,
    Redo,
    Resize { width: u32, height: u32 },
    Load { path: PathBuf },
    Save { path: PathBuf },
    Pixel { x: i32, y: i32 },
}

/// Parses a single script line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: usize, text: &str) -> Result<Option<Command>, ScriptError> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }

    let mut parts = text.split_whitespace();
    let command = parts.next().unwrap_or_default().to_ascii_lowercase();
    let args: Vec<&str> = parts.collect();

    let wrong = |expected: &'static str| ScriptError::WrongArguments {
        line,
        command: command.clone(),
        expected,
    };
    let color = |value: &str| {
        Color::from_str(value).map_err(|source| ScriptError::InvalidColor { line, source })
    };
    let number = |value: &str| parse_number::<i32>(line, value);
    let size = |value: &str| parse_number::<u32>(line, value);

    let parsed = match (command.as_str(), args.as_slice()) {
        ("paint", [x, y, c]) => Command::Paint {
            x: number(*x)?,
            y: number(*y)?,
            color: color(*c)?,
        },
        ("paint", _) => return Err(wrong("X Y COLOR")),
        ("erase", [x, y]) => Command::Erase {
            x: number(*x)?,
            y: number(*y)?,
        },
        ("erase", _) => return Err(wrong("X Y")),
        ("fill", [c]) => Command::Fill { color: color(*c)? },
        ("fill", _) => return Err(wrong("COLOR")),
        ("undo", []) => Command::Undo,
        ("redo", []) => Command::Redo,
        ("undo" | "redo", _) => return Err(wrong("no arguments")),
        ("resize", [w, h]) => Command::Resize {
            width: size(*w)?,
            height: size(*h)?,
        },
        ("resize", _) => return Err(wrong("WIDTH HEIGHT")),
        ("load", [path]) => Command::Load {
            path: PathBuf::from(*path),
        },
        ("save", [path]) => Command::Save {
            path: PathBuf::from(*path),
        },
        ("load" | "save", _) => return Err(wrong("PATH")),
        ("pixel", [x, y]) => Command::Pixel {
            x: number(*x)?,
            y: number(*y)?,
        },
        ("pixel", _) => return Err(wrong("X Y")),
        _ => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: command.clone(),
            })
        }
    };

    Ok(Some(parsed))
}

fn parse_number<T: FromStr>(line: usize, value: &str) -> Result<T, ScriptError> {
    value.parse().map_err(|_| ScriptError::InvalidNumber {
        line,
        value: value.to_string(),
    })
}

/// Parses a whole script into `(line number, command)` pairs, numbering
/// lines from 1.
pub fn parse(text: &str) -> Result<Vec<(usize, Command)>, ScriptError> {
    text.lines()
        .enumerate()
        .filter_map(|(index, line)| {
            parse_line(index + 1, line)
                .map(|command| command.map(|command| (index + 1, command)))
                .transpose()
        })
        .collect()
}
