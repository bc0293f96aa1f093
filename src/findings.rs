//! Scan result records.

use std::fmt;

use serde::Serialize;

use crate::core::tools::Tool;

/// One suppression directive found at a specific file, line and tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub path: String,
    /// 1-based.
    pub line: usize,
    pub tool: Tool,
    /// Canonical directive, e.g. `pylint: disable`.
    pub directive: &'static str,
    /// Raw text that matched, e.g. `type: ignore[import]`.
    pub snippet: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.path, self.line, self.tool, self.directive
        )
    }
}

/// A file that was selected but could not be read or walked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadError {
    pub path: String,
    pub message: String,
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error reading {}: {}", self.path, self.message)
    }
}

/// Result of scanning one selected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: String,
    pub findings: Vec<Finding>,
    pub error: Option<ReadError>,
}

/// Everything a scan produced, in presentation order.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Selected files in ascending path order. Under fail-fast this stops at
    /// the file holding the first finding.
    pub files: Vec<FileReport>,
    /// Directory entries that could not be walked during selection.
    pub walk_errors: Vec<ReadError>,
}

impl ScanOutcome {
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.files.iter().flat_map(|file| file.findings.iter())
    }

    pub fn finding_count(&self) -> usize {
        self.files.iter().map(|file| file.findings.len()).sum()
    }

    pub fn has_findings(&self) -> bool {
        self.files.iter().any(|file| !file.findings.is_empty())
    }

    /// Files that were read successfully.
    pub fn files_scanned(&self) -> usize {
        self.files.iter().filter(|file| file.error.is_none()).count()
    }

    pub fn read_errors(&self) -> impl Iterator<Item = &ReadError> {
        self.walk_errors
            .iter()
            .chain(self.files.iter().filter_map(|file| file.error.as_ref()))
    }

    pub fn has_read_errors(&self) -> bool {
        self.read_errors().next().is_some()
    }
}
