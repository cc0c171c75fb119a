// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Visibility checker binary entry point.

use std::io::{self, Write};

use clap::Parser;

use check_visibility::check::{self, exit_codes, Report};
use check_visibility::cli::Cli;
use check_visibility::error::CheckError;
use check_visibility::output::{print_error, print_info, print_warning, write_report};

fn main() {
    let cli = Cli::parse();

    match execute(&cli) {
        Ok(report) => std::process::exit(report.exit_code()),
        Err(e) => {
            print_error(e);
            std::process::exit(exit_codes::FATAL);
        }
    }
}

fn execute(cli: &Cli) -> Result<Report, CheckError> {
    let report = check::run(&cli.config())?;

    if cli.verbose {
        if report.checked == 0 {
            print_warning(format_args!("{} declares no names", cli.map.display()));
        }
        print_info(format_args!(
            "checked {} declared names against {} exported symbols",
            report.checked, report.exported
        ));
    }

    let mut stdout = io::stdout().lock();
    write_report(
        &mut stdout,
        &report,
        cli.output_format,
        &cli.library,
        &cli.map,
    )?;
    stdout.flush().map_err(CheckError::Stdout)?;
    Ok(report)
}
