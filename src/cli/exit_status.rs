use std::process::ExitCode;

use crate::findings::ScanOutcome;

/// Process exit status.
///
/// - `Success` (0): no findings, or `--warn-only`
/// - `Failure` (1): at least one finding
/// - `Error` (2): usage, path or config error, or read errors under `failOnReadError`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Nothing found, or findings reported under `--warn-only`.
    Success,
    /// The scan found at least one directive.
    Failure,
    /// Bad arguments, a missing path, an invalid config, or unreadable files
    /// with `failOnReadError` set.
    Error,
}

impl ExitStatus {
    /// Exit status for a completed scan.
    ///
    /// Read errors only count when `fail_on_read_error` is set and nothing was
    /// found; findings always take precedence.
    pub fn from_outcome(outcome: &ScanOutcome, warn_only: bool, fail_on_read_error: bool) -> Self {
        if warn_only {
            ExitStatus::Success
        } else if outcome.has_findings() {
            ExitStatus::Failure
        } else if fail_on_read_error && outcome.has_read_errors() {
            ExitStatus::Error
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
