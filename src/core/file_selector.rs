//! Turns path arguments into the ordered list of files to scan.
//!
//! Each argument is a literal file, a directory (walked recursively) or a glob
//! pattern. Glob expansion includes hidden files and directories. The result
//! is deduplicated after dropping `.` components, filtered by exclude patterns and tool eligibility, and
//! sorted by path bytes.

use std::{
    collections::BTreeSet,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::{MatchOptions, glob_with};
use walkdir::WalkDir;

use crate::{
    core::{
        patterns::{ExcludeSet, is_glob_pattern},
        tools::{Tool, tools_for_extension},
    },
    findings::ReadError,
};

/// A file to scan and the requested tools that apply to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: String,
    /// Registry order.
    pub tools: Vec<Tool>,
}

#[derive(Debug, Default)]
pub struct Selection {
    /// Ascending byte order of path.
    pub files: Vec<SelectedFile>,
    /// Entries under a walked directory that could not be read.
    pub walk_errors: Vec<ReadError>,
}

const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Resolve `inputs` into the files that `tools` should scan.
///
/// A path that does not exist, or a glob that matches nothing, is an error.
pub fn select_files(
    inputs: &[String],
    tools: &BTreeSet<Tool>,
    exclude: &ExcludeSet,
) -> Result<Selection> {
    let mut candidates: BTreeSet<String> = BTreeSet::new();
    let mut walk_errors = Vec::new();

    for input in inputs {
        expand_input(input, &mut candidates, &mut walk_errors)?;
    }

    // `String` ordering is byte order, so the set is already sorted.
    let mut files = Vec::new();
    for path in candidates {
        if exclude.is_excluded(&path) {
            continue;
        }
        let Some(extension) = Path::new(&path).extension().and_then(|e| e.to_str()) else {
            continue;
        };
        let applicable = tools_for_extension(extension, tools);
        if !applicable.is_empty() {
            files.push(SelectedFile {
                path,
                tools: applicable,
            });
        }
    }

    Ok(Selection {
        files,
        walk_errors,
    })
}

fn expand_input(
    input: &str,
    candidates: &mut BTreeSet<String>,
    walk_errors: &mut Vec<ReadError>,
) -> Result<()> {
    let path = Path::new(input);

    if path.is_file() {
        candidates.insert(normalize(path));
        return Ok(());
    }

    if path.is_dir() {
        walk_dir(path, candidates, walk_errors);
        return Ok(());
    }

    if path.exists() {
        // Neither file nor directory (socket, fifo): nothing to scan.
        return Ok(());
    }

    if !is_glob_pattern(input) {
        bail!("Path does not exist: {}", input);
    }

    let entries = glob_with(input, GLOB_OPTIONS)
        .with_context(|| format!("Invalid glob pattern: \"{}\"", input))?;

    let mut matched = false;
    for entry in entries {
        match entry {
            Ok(found) => {
                matched = true;
                if found.is_dir() {
                    walk_dir(&found, candidates, walk_errors);
                } else if found.is_file() {
                    candidates.insert(normalize(&found));
                }
            }
            Err(e) => walk_errors.push(ReadError {
                path: e.path().to_string_lossy().into_owned(),
                message: e.error().to_string(),
            }),
        }
    }

    if !matched {
        bail!("No files matched pattern: {}", input);
    }

    Ok(())
}

fn walk_dir(dir: &Path, candidates: &mut BTreeSet<String>, walk_errors: &mut Vec<ReadError>) {
    for entry in WalkDir::new(dir) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let path = e
                    .path()
                    .map(|p| p.to_string_lossy().into_owned())
                    .unwrap_or_else(|| dir.to_string_lossy().into_owned());
                walk_errors.push(ReadError {
                    path,
                    message: e.to_string(),
                });
                continue;
            }
        };
        if entry.file_type().is_file() {
            candidates.insert(normalize(entry.path()));
        }
    }
}

/// `./a.py`, `a.py` and `src/./a.py` name the same file; keep one spelling.
fn normalize(path: &Path) -> String {
    let cleaned: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if cleaned.as_os_str().is_empty() {
        return path.to_string_lossy().into_owned();
    }
    cleaned.to_string_lossy().into_owned()
}
