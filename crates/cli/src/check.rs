// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The visibility check itself.

use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::CheckError;
use crate::symbols::{ExportedSymbols, SymbolDumper};
use crate::vismap;

/// Process exit codes.
pub mod exit_codes {
    /// Every declared name is exported
    pub const SUCCESS: i32 = 0;
    /// At least one declared name is missing from the library
    pub const MISSING_SYMBOLS: i32 = 1;
    /// The dumper or the map could not be read
    pub const FATAL: i32 = 2;
}

/// Inputs to a check run.
#[derive(Clone, Debug)]
pub struct Config {
    pub library: PathBuf,
    pub map: PathBuf,
    pub dumper: SymbolDumper,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library: PathBuf::from("libscrutiny.so"),
            map: PathBuf::from("src/vis.map"),
            dumper: SymbolDumper::default(),
        }
    }
}

/// Outcome of comparing declared names against exported symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Number of declared names examined, duplicates included
    pub checked: usize,
    /// Number of distinct exported text symbols
    pub exported: usize,
    /// Declared names absent from the library, in map order
    pub missing: Vec<String>,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            exit_codes::SUCCESS
        } else {
            exit_codes::MISSING_SYMBOLS
        }
    }

    /// Write one `<name> not in library.` line per missing name.
    pub fn write_text<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for name in &self.missing {
            writeln!(writer, "{} not in library.", name)?;
        }
        Ok(())
    }
}

/// Test every declared name against `exported`.
///
/// Every name is checked; the first missing one does not stop the scan.
/// Stops early only when `declared` yields an error.
pub fn check<I>(exported: &ExportedSymbols, declared: I) -> Result<Report, CheckError>
where
    I: IntoIterator<Item = Result<String, CheckError>>,
{
    let mut report = Report {
        exported: exported.len(),
        ..Report::default()
    };

    for name in declared {
        let name = name?;
        report.checked += 1;
        if !exported.contains(&name) {
            report.missing.push(name);
        }
    }

    Ok(report)
}

/// Dump the library's symbols, then check the map against them.
pub fn run(config: &Config) -> Result<Report, CheckError> {
    let exported = config.dumper.exported_symbols(&config.library)?;
    let declared = vismap::open(&config.map)?;
    check(&exported, declared)
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
