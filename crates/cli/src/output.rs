// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report and diagnostic output.
//!
//! The report goes to stdout. Diagnostics go to stderr, colored only when
//! stderr is a terminal.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use serde::Serialize;

use crate::check::Report;
use crate::cli::OutputFormat;
use crate::error::CheckError;

/// Print an error message to stderr.
///
/// Displays in red when stderr is a terminal, plain text otherwise.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

fn write_error<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[31mError: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Error: {}", msg);
    }
}

/// Print a warning message to stderr.
///
/// Displays in yellow when stderr is a terminal, plain text otherwise.
pub fn print_warning(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_warning(&mut io::stderr(), msg, is_tty);
}

fn write_warning<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[33mWarning: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Warning: {}", msg);
    }
}

/// Print a verbose status line to stderr.
pub fn print_info(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_info(&mut io::stderr(), msg, is_tty);
}

fn write_info<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[2mInfo: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Info: {}", msg);
    }
}

/// JSON form of a [`Report`], tagged with the inputs it was built from.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    library: &'a Path,
    map: &'a Path,
    #[serde(flatten)]
    report: &'a Report,
}

/// Write `report` in the requested format.
pub fn write_report<W: Write>(
    writer: &mut W,
    report: &Report,
    format: OutputFormat,
    library: &Path,
    map: &Path,
) -> Result<(), CheckError> {
    match format {
        OutputFormat::Text => report.write_text(writer).map_err(CheckError::Stdout)?,
        OutputFormat::Json => {
            let json = JsonReport {
                library,
                map,
                report,
            };
            serde_json::to_writer(&mut *writer, &json)?;
            writeln!(writer).map_err(CheckError::Stdout)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
