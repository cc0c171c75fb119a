// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fatal errors raised while gathering symbols or reading the map.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a visibility check.
///
/// A declared name missing from the library is not an error; it ends up in
/// the [`Report`](crate::check::Report).
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with non-zero status (code: {code:?}): {stderr}")]
    DumpFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("'{program}' produced output that is not valid UTF-8")]
    Utf8 { program: String },

    #[error("Failed to open visibility map '{}': {source}", path.display())]
    OpenMap {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read visibility map '{}': {source}", path.display())]
    ReadMap {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report: {0}")]
    Stdout(#[source] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
