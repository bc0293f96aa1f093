//! Output formatting: plain lines, JSON, count and verbose progress.
//!
//! Findings go to stdout. Read errors go to stderr as warnings.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;

use super::{args::OutputMode, run::Settings};
use crate::{
    core::Tool,
    findings::{Finding, ReadError, ScanOutcome},
};

pub fn print(settings: &Settings, outcome: &ScanOutcome) -> Result<()> {
    print_to(
        settings,
        outcome,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

/// Print to custom writers.
pub fn print_to<W: Write, E: Write>(
    settings: &Settings,
    outcome: &ScanOutcome,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    for error in &outcome.walk_errors {
        print_read_error(error, err)?;
    }

    if settings.verbose {
        return print_verbose(settings, outcome, out, err);
    }

    for error in outcome.files.iter().filter_map(|file| file.error.as_ref()) {
        print_read_error(error, err)?;
    }

    match settings.output {
        OutputMode::Plain => {
            for finding in outcome.findings() {
                writeln!(out, "{}", finding)?;
            }
        }
        OutputMode::Json => {
            let findings: Vec<&Finding> = outcome.findings().collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&findings)?)?;
        }
        OutputMode::Count => writeln!(out, "{}", outcome.finding_count())?,
        OutputMode::Quiet => {}
    }

    Ok(())
}

fn print_verbose<W: Write, E: Write>(
    settings: &Settings,
    outcome: &ScanOutcome,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    if let Some(path) = &settings.config_path {
        writeln!(out, "Using config: {}", path.display())?;
    }
    let tools: Vec<&str> = settings.request.tools.iter().map(Tool::as_str).collect();
    writeln!(out, "Checking for: {}", tools.join(", "))?;

    for file in &outcome.files {
        writeln!(out, "Scanning: {}", file.path)?;
        if let Some(error) = &file.error {
            print_read_error(error, err)?;
        }
        for finding in &file.findings {
            writeln!(out, "{}", finding)?;
        }
    }

    writeln!(
        out,
        "Scanned {} file(s), found {} finding(s)",
        outcome.files_scanned(),
        outcome.finding_count()
    )?;
    Ok(())
}

fn print_read_error<E: Write>(error: &ReadError, err: &mut E) -> Result<()> {
    writeln!(err, "{} {}", "warning:".bold().yellow(), error)?;
    Ok(())
}
