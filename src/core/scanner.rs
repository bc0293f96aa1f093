//! Scan orchestration: selection, per-line extraction and matching, allow
//! filtering and fail-fast.

use std::{collections::BTreeSet, fs};

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::{
    core::{
        comments::{CarryState, extract},
        file_selector::{SelectedFile, select_files},
        matcher::find_directive,
        patterns::{AllowSet, ExcludeSet},
        tools::{CommentSyntax, Tool},
    },
    findings::{FileReport, Finding, ReadError, ScanOutcome},
};

/// Inputs for one scan. Built once and not modified while scanning.
#[derive(Debug, Clone, Default)]
pub struct ScanRequest {
    /// Files, directories or glob patterns.
    pub paths: Vec<String>,
    pub tools: BTreeSet<Tool>,
    pub exclude: Vec<String>,
    pub allow: Vec<String>,
    /// Stop after the first finding.
    pub fail_fast: bool,
}

/// Run a scan.
///
/// Errors are usage or path errors (bad pattern, missing path, glob without
/// matches). Unreadable files are recorded in the outcome instead.
///
/// Files are scanned in parallel unless `fail_fast` is set; the outcome is in
/// path order either way.
pub fn scan(request: &ScanRequest) -> Result<ScanOutcome> {
    let exclude = ExcludeSet::new(&request.exclude)?;
    let allow = AllowSet::new(&request.allow)?;
    let selection = select_files(&request.paths, &request.tools, &exclude)?;

    let files = if request.fail_fast {
        scan_until_first_finding(&selection.files, &allow)
    } else {
        selection
            .files
            .par_iter()
            .map(|file| scan_file(file, &allow, false))
            .collect()
    };

    Ok(ScanOutcome {
        files,
        walk_errors: selection.walk_errors,
    })
}

fn scan_until_first_finding(files: &[SelectedFile], allow: &AllowSet) -> Vec<FileReport> {
    let mut reports = Vec::new();
    for file in files {
        let report = scan_file(file, allow, true);
        let found = !report.findings.is_empty();
        reports.push(report);
        if found {
            break;
        }
    }
    reports
}

fn scan_file(file: &SelectedFile, allow: &AllowSet, stop_at_first: bool) -> FileReport {
    let (findings, error) = match read_source(&file.path) {
        Ok(content) => (
            scan_source(&file.path, &content, &file.tools, allow, stop_at_first),
            None,
        ),
        Err(err) => (
            Vec::new(),
            Some(ReadError {
                path: file.path.clone(),
                message: format!("{:#}", err),
            }),
        ),
    };

    FileReport {
        path: file.path.clone(),
        findings,
        error,
    }
}

fn read_source(path: &str) -> Result<String> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).context("file is not valid UTF-8")
}

/// Scan file content for `tools`, which must be in registry order.
///
/// Block-comment state is carried from line to line and starts closed. At
/// most one finding is produced per line and tool.
pub fn scan_source(
    path: &str,
    content: &str,
    tools: &[Tool],
    allow: &AllowSet,
    stop_at_first: bool,
) -> Vec<Finding> {
    // Pragma lines need the block-comment state even when no C-style tool is
    // requested.
    let tracks_blocks = tools.iter().any(|tool| {
        matches!(
            tool.comment_syntax(),
            CommentSyntax::CStyle | CommentSyntax::PragmaLine
        )
    });

    let mut findings = Vec::new();
    let mut carry = CarryState::default();

    for (index, line) in content.lines().enumerate() {
        let line_start = carry;
        let c_style = tracks_blocks.then(|| extract(line, CommentSyntax::CStyle, line_start));
        if let Some(extraction) = &c_style {
            carry = extraction.carry;
        }

        for &tool in tools {
            let syntax = tool.comment_syntax();
            let other;
            let comments = match (&c_style, syntax) {
                (Some(extraction), CommentSyntax::CStyle) => &extraction.comments,
                _ => {
                    other = extract(line, syntax, line_start).comments;
                    &other
                }
            };

            let Some(found) = find_directive(comments, tool) else {
                continue;
            };
            if allow.allows(line) {
                continue;
            }

            findings.push(Finding {
                path: path.to_string(),
                line: index + 1,
                tool,
                directive: found.label,
                snippet: found.snippet.to_string(),
            });
            if stop_at_first {
                return findings;
            }
        }
    }

    findings
}
