// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.
//!
//! Every flag is optional; with none the check runs `nm -D libscrutiny.so`
//! against `src/vis.map` in the working directory.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::check::Config;
use crate::symbols::SymbolDumper;

/// Verify that every name in a visibility map is exported by a shared library
#[derive(Parser, Debug, Clone)]
#[command(name = "check-visibility", version)]
pub struct Cli {
    /// Shared library to inspect
    #[arg(long, value_name = "PATH", default_value = "libscrutiny.so")]
    pub library: PathBuf,

    /// Visibility map listing the names the library must export
    #[arg(long, value_name = "PATH", default_value = "src/vis.map")]
    pub map: PathBuf,

    /// Dynamic symbol listing program, invoked as `<nm> -D <library>`
    #[arg(long, value_name = "PROGRAM", env = "NM", default_value = "nm")]
    pub nm: String,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// Print a summary to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            library: self.library.clone(),
            map: self.map.clone(),
            dumper: SymbolDumper::new(self.nm.clone()),
        }
    }
}

/// Report format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `<name> not in library.` line per missing name
    #[default]
    Text,
    /// A single JSON object
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
