// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for running the checker against a stub `nm`.

#![allow(dead_code)]

#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// `nm -D` output for a library exporting `alpha` and `beta`.
pub const NM_ALPHA_BETA: &str = "\
                 w __cxa_finalize
                 U fork
0000000000001139 T alpha
0000000000001150 T beta
0000000000004010 D gamma
";

/// A working directory holding a stub `nm`, a visibility map, and nothing else.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Install a stub `nm` that prints `stdout` and exits with `code`.
    ///
    /// The stub exits 9 unless invoked as `<stub> -D <library>`.
    pub fn stub_nm(self, library: &str, stdout: &str, code: i32) -> Self {
        let script = format!(
            "#!/bin/sh\n\
             [ \"$1\" = \"-D\" ] && [ \"$2\" = \"{library}\" ] || exit 9\n\
             cat <<'NM_EOF'\n{stdout}NM_EOF\n\
             [ {code} -eq 0 ] || echo \"nm: {library}: file format not recognized\" >&2\n\
             exit {code}\n"
        );
        let path = self.nm_path();
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        self
    }

    /// Write the map at the default `src/vis.map` location.
    pub fn map(self, contents: &str) -> Self {
        self.map_at("src/vis.map", contents)
    }

    pub fn map_at(self, relative: &str, contents: &str) -> Self {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
        self
    }

    pub fn nm_path(&self) -> PathBuf {
        self.dir.path().join("fake-nm")
    }

    /// Checker command running inside the fixture directory, with no flags.
    pub fn bare_command(&self) -> Command {
        let mut cmd = Command::cargo_bin("check-visibility").unwrap();
        cmd.current_dir(self.path()).env_remove("NM");
        cmd
    }

    /// Checker command running inside the fixture directory with the stub `nm`.
    pub fn command(&self) -> Command {
        let mut cmd = self.bare_command();
        cmd.arg("--nm").arg(self.nm_path());
        cmd
    }
}
