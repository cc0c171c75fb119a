// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Visibility map reader.
//!
//! Extracts declared names from a linker version script:
//!
//! ```text
//! {
//!     global:
//!         scrutiny_run_tests;    yields "scrutiny_run_tests"
//!     local: *;                  skipped
//! };                             skipped
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::CheckError;

/// Optional leading whitespace, a name, then a semicolon ending the line.
static DECLARATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^\s*(\w+);$").expect("declaration regex pattern is invalid")
});

/// Return the declared name on `line`, if any.
pub fn parse_declaration(line: &str) -> Option<&str> {
    DECLARATION_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Lazy iterator over the names declared in a visibility map, in file order.
///
/// Duplicates are yielded as often as they appear.
#[derive(Debug)]
pub struct DeclaredNames<R> {
    lines: Lines<R>,
    path: PathBuf,
}

/// Read declarations from an already-open reader.
///
/// `path` is only used for error messages.
pub fn declared_names<R: BufRead>(reader: R, path: impl Into<PathBuf>) -> DeclaredNames<R> {
    DeclaredNames {
        lines: reader.lines(),
        path: path.into(),
    }
}

/// Open the map at `path`. The file stays open until the iterator is dropped.
pub fn open(path: &Path) -> Result<DeclaredNames<BufReader<File>>, CheckError> {
    let file = File::open(path).map_err(|source| CheckError::OpenMap {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(declared_names(BufReader::new(file), path))
}

impl<R: BufRead> Iterator for DeclaredNames<R> {
    type Item = Result<String, CheckError>;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            let line = match line {
                Ok(line) => line,
                Err(source) => {
                    return Some(Err(CheckError::ReadMap {
                        path: self.path.clone(),
                        source,
                    }));
                }
            };
            if let Some(name) = parse_declaration(&line) {
                return Some(Ok(name.to_string()));
            }
        }
        None
    }
}

#[cfg(test)]
#[path = "vismap_tests.rs"]
mod tests;
