// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Exported symbol discovery.
//!
//! Runs `nm -D` against a shared library and keeps the names of defined
//! global text symbols:
//!
//! ```text
//! 0000000000001139 T scrutiny_run_tests    kept
//!                  U puts                  ignored (undefined)
//! 0000000000004010 D scrutiny_version      ignored (data)
//! ```

use std::collections::HashSet;
use std::path::Path;
use std::process::Command;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::CheckError;

/// Whitespace, the `T` marker, whitespace, then a symbol name ending the line.
static TEXT_SYMBOL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"\s+T\s+(\w+)$").expect("text symbol regex pattern is invalid")
});

/// Set of function names a shared library exports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportedSymbols {
    names: HashSet<String>,
}

impl ExportedSymbols {
    /// Parse `nm -D` output. Lines that are not defined text symbols are skipped.
    pub fn parse(output: &str) -> Self {
        let names = output
            .lines()
            .filter_map(|line| TEXT_SYMBOL_REGEX.captures(line))
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect();
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ExportedSymbols {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Runs the dynamic-symbol-listing program.
#[derive(Clone, Debug)]
pub struct SymbolDumper {
    program: String,
}

impl Default for SymbolDumper {
    fn default() -> Self {
        Self::new("nm")
    }
}

impl SymbolDumper {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run `<program> -D <library>` and return its stdout.
    ///
    /// Blocks until the program exits. A non-zero exit is fatal.
    pub fn dump(&self, library: &Path) -> Result<String, CheckError> {
        let output = Command::new(&self.program)
            .arg("-D")
            .arg(library)
            .output()
            .map_err(|source| CheckError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CheckError::DumpFailed {
                program: self.program.clone(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| CheckError::Utf8 {
            program: self.program.clone(),
        })
    }

    /// Dump and parse in one step.
    pub fn exported_symbols(&self, library: &Path) -> Result<ExportedSymbols, CheckError> {
        let output = self.dump(library)?;
        Ok(ExportedSymbols::parse(&output))
    }
}

#[cfg(test)]
#[path = "symbols_tests.rs"]
mod tests;
