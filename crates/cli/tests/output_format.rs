// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![cfg(unix)]

//! JSON reports and verbose diagnostics.

mod common;

use common::{Fixture, NM_ALPHA_BETA};
use predicates::prelude::*;

#[test]
fn json_report_lists_missing_names() {
    let fixture = Fixture::new()
        .stub_nm("libscrutiny.so", NM_ALPHA_BETA, 0)
        .map("alpha;\ngamma;\n");

    let output = fixture
        .command()
        .args(["--output-format", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        report,
        serde_json::json!({
            "library": "libscrutiny.so",
            "map": "src/vis.map",
            "checked": 2,
            "exported": 2,
            "missing": ["gamma"],
        })
    );
}

#[test]
fn json_report_on_success() {
    let fixture = Fixture::new()
        .stub_nm("libscrutiny.so", NM_ALPHA_BETA, 0)
        .map("alpha;\nbeta;\n");

    fixture
        .command()
        .args(["--output-format", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains(r#""missing":[]"#));
}

#[test]
fn verbose_summary_goes_to_stderr() {
    let fixture = Fixture::new()
        .stub_nm("libscrutiny.so", NM_ALPHA_BETA, 0)
        .map("alpha;\ngamma;\nalpha;\n");

    fixture
        .command()
        .arg("--verbose")
        .assert()
        .code(1)
        .stdout("gamma not in library.\n")
        .stderr("Info: checked 3 declared names against 2 exported symbols\n");
}

#[test]
fn verbose_warns_on_empty_map() {
    let fixture = Fixture::new()
        .stub_nm("libscrutiny.so", NM_ALPHA_BETA, 0)
        .map("{\n    local: *;\n};\n");

    fixture
        .command()
        .arg("-v")
        .assert()
        .code(0)
        .stdout("")
        .stderr(predicate::str::contains("Warning: src/vis.map declares no names"));
}
