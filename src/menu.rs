//! Interactive menu: an explicit finite-state loop over stdin.
//!
//! States: main menu → file mode | directory mode | WebP → JPEG toggle
//! (which re-offers file/directory with the re-conversion flag set). Each
//! mode loops reading one path per line until end of input; invalid
//! selections and paths print a red line and re-prompt, never terminate.
//!
//! The loops read from any [`BufRead`] and write to any [`Write`], so tests
//! drive them with in-memory cursors. End of input cleanly unwinds every
//! state; an interactive session therefore runs until the terminal closes or
//! the process is interrupted.
//!
//! Paths are taken verbatim after trimming whitespace and the surrounding
//! quote characters terminals add on drag-and-drop.

use crate::imaging::ImageBackend;
use crate::output;
use crate::process::{self, ConvertConfig};
use crate::scan;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;

/// A rejected prompt input. Every variant is recoverable: the message is
/// printed in red and the current state re-prompts.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PromptError {
    #[error("unknown selection: {0}")]
    InvalidSelection(String),
    #[error("no such path: {0}")]
    InvalidPath(String),
    #[error("not a directory: {0}")]
    NotADirectory(String),
    #[error("not an image: {0}")]
    UnsupportedExtension(String),
}

/// Main-menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    FileMode,
    DirMode,
    ToggleMenu,
}

pub const MAIN_PROMPT: &str = "\
single file   -> 1\n\
whole folder  -> 2\n\
WebP to JPEG  -> 3\n\
select: ";

pub const TOGGLE_PROMPT: &str = "\
single file   -> 1\n\
whole folder  -> 2\n\
select: ";

pub const FILE_PROMPT: &str = "drop a file or enter a path: ";
pub const DIR_PROMPT: &str = "drop a folder or enter a path: ";

/// Strip whitespace and the quote characters terminals wrap around
/// dragged-in paths.
pub fn clean_path(input: &str) -> &str {
    input.trim().trim_matches(|c| c == '"' || c == '\'')
}

pub fn parse_selection(input: &str) -> Result<Selection, PromptError> {
    match input.trim() {
        "1" => Ok(Selection::FileMode),
        "2" => Ok(Selection::DirMode),
        "3" => Ok(Selection::ToggleMenu),
        other => Err(PromptError::InvalidSelection(other.to_string())),
    }
}

/// Sub-menu inside the WebP → JPEG toggle: only file/directory.
pub fn parse_sub_selection(input: &str) -> Result<Selection, PromptError> {
    match parse_selection(input)? {
        Selection::ToggleMenu => Err(PromptError::InvalidSelection(input.trim().to_string())),
        mode => Ok(mode),
    }
}

/// Validate a single-file input: must exist and carry a recognized image
/// extension.
pub fn validate_file_path(input: &str) -> Result<PathBuf, PromptError> {
    let cleaned = clean_path(input);
    let path = PathBuf::from(cleaned);
    if !path.exists() {
        return Err(PromptError::InvalidPath(cleaned.to_string()));
    }
    if !scan::has_extension(&path, scan::FILE_MODE_EXTENSIONS) {
        return Err(PromptError::UnsupportedExtension(cleaned.to_string()));
    }
    Ok(path)
}

/// Validate a directory input: must exist and be a directory.
pub fn validate_dir_path(input: &str) -> Result<PathBuf, PromptError> {
    let cleaned = clean_path(input);
    let path = PathBuf::from(cleaned);
    if !path.exists() {
        return Err(PromptError::InvalidPath(cleaned.to_string()));
    }
    if !path.is_dir() {
        return Err(PromptError::NotADirectory(cleaned.to_string()));
    }
    Ok(path)
}

/// Read one line; `None` on end of input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}

fn prompt(out: &mut impl Write, text: &str) -> io::Result<()> {
    write!(out, "{}", text)?;
    out.flush()
}

fn report_error(out: &mut impl Write, err: &PromptError) -> io::Result<()> {
    writeln!(out, "{}", output::error_line(&err.to_string()))
}

/// Top-level state: dispatches into the modes until end of input.
pub fn run(
    backend: &impl ImageBackend,
    config: ConvertConfig,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    loop {
        prompt(out, MAIN_PROMPT)?;
        let Some(line) = read_line(input)? else {
            return Ok(());
        };
        match parse_selection(&line) {
            Ok(Selection::FileMode) => file_mode(backend, config, input, out)?,
            Ok(Selection::DirMode) => dir_mode(backend, config, input, out)?,
            Ok(Selection::ToggleMenu) => toggle_menu(backend, config, input, out)?,
            Err(err) => report_error(out, &err)?,
        }
    }
}

fn file_mode(
    backend: &impl ImageBackend,
    config: ConvertConfig,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    loop {
        prompt(out, FILE_PROMPT)?;
        let Some(line) = read_line(input)? else {
            return Ok(());
        };
        match validate_file_path(&line) {
            Ok(path) => {
                process::convert_file(backend, &path, &config, &mut |event| {
                    if let Some(text) = output::event_line(&event) {
                        writeln!(out, "{}", text).ok();
                    }
                });
            }
            Err(err) => report_error(out, &err)?,
        }
    }
}

fn dir_mode(
    backend: &impl ImageBackend,
    config: ConvertConfig,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    loop {
        prompt(out, DIR_PROMPT)?;
        let Some(line) = read_line(input)? else {
            return Ok(());
        };
        match validate_dir_path(&line) {
            Ok(path) => {
                process::convert_tree(backend, &path, &config, &mut |event| {
                    if let Some(text) = output::event_line(&event) {
                        writeln!(out, "{}", text).ok();
                    }
                });
            }
            Err(err) => report_error(out, &err)?,
        }
    }
}

/// WebP → JPEG state: same file/directory modes, with the re-conversion
/// flag set on the config passed down (never stored globally).
fn toggle_menu(
    backend: &impl ImageBackend,
    config: ConvertConfig,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    let chained = config.with_jpeg_chain();
    writeln!(out, "WebP to JPEG mode enabled")?;
    loop {
        prompt(out, TOGGLE_PROMPT)?;
        let Some(line) = read_line(input)? else {
            return Ok(());
        };
        match parse_sub_selection(&line) {
            Ok(Selection::FileMode) => file_mode(backend, chained, input, out)?,
            Ok(Selection::DirMode) => dir_mode(backend, chained, input, out)?,
            Ok(Selection::ToggleMenu) => unreachable!("rejected by parse_sub_selection"),
            Err(err) => report_error(out, &err)?,
        }
    }
}
