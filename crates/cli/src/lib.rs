// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Visibility map checker.
//!
//! Verifies that every function named in a linker visibility map is exported
//! as a defined text symbol by the compiled shared library. Meant to run as a
//! build step after the library is linked.
//!
//! ```no_run
//! use check_visibility::check::{self, Config};
//!
//! let report = check::run(&Config::default())?;
//! for name in &report.missing {
//!     println!("{} not in library.", name);
//! }
//! # Ok::<(), check_visibility::error::CheckError>(())
//! ```

pub mod check;
pub mod cli;
pub mod error;
pub mod output;
pub mod symbols;
pub mod vismap;
