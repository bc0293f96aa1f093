//! Exclude and allow pattern matching.
//!
//! Patterns containing `*` or `?` are globs; anything else is literal. Brackets
//! alone do not make a glob, so allow patterns like `type: ignore[import]`
//! stay literal.

use std::path::{Component, Path};

use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern};

/// Check if a pattern contains glob wildcards (* or ?).
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Compiled `--exclude` patterns.
///
/// A glob excludes a path when it matches the whole path or just the file
/// name. A literal excludes a path when it equals the path, is a leading
/// prefix of it, or names one of its components.
#[derive(Debug, Default)]
pub struct ExcludeSet {
    globs: Vec<Pattern>,
    literals: Vec<String>,
}

impl ExcludeSet {
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut set = Self::default();
        for pattern in patterns {
            if is_glob_pattern(pattern) {
                let glob = Pattern::new(pattern)
                    .with_context(|| format!("Invalid exclude pattern: \"{}\"", pattern))?;
                set.globs.push(glob);
            } else {
                set.literals.push(pattern.clone());
            }
        }
        Ok(set)
    }

    pub fn is_excluded(&self, path: &str) -> bool {
        let file_name = Path::new(path)
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();

        if self
            .globs
            .iter()
            .any(|glob| glob.matches(path) || glob.matches(&file_name))
        {
            return true;
        }

        self.literals
            .iter()
            .any(|literal| literal_excludes(literal, path))
    }
}

fn literal_excludes(literal: &str, path: &str) -> bool {
    let path = Path::new(path);
    path.starts_with(literal)
        || path
            .components()
            .any(|c| matches!(c, Component::Normal(name) if name == literal))
}

/// Compiled `--allow` patterns.
///
/// A finding is allowed when its source line contains a literal pattern
/// (case-insensitive) or, for glob patterns, when the trimmed line matches the
/// glob (case-insensitive).
#[derive(Debug, Default)]
pub struct AllowSet {
    globs: Vec<Pattern>,
    literals: Vec<String>,
}

const CASE_INSENSITIVE: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

impl AllowSet {
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut set = Self::default();
        for pattern in patterns {
            if is_glob_pattern(pattern) {
                let glob = Pattern::new(pattern)
                    .with_context(|| format!("Invalid allow pattern: \"{}\"", pattern))?;
                set.globs.push(glob);
            } else {
                set.literals.push(pattern.to_lowercase());
            }
        }
        Ok(set)
    }

    pub fn is_empty(&self) -> bool {
        self.globs.is_empty() && self.literals.is_empty()
    }

    pub fn allows(&self, line: &str) -> bool {
        if self.is_empty() {
            return false;
        }

        let lowered = line.to_lowercase();
        if self.literals.iter().any(|lit| lowered.contains(lit.as_str())) {
            return true;
        }

        let trimmed = line.trim();
        self.globs
            .iter()
            .any(|glob| glob.matches_with(trimmed, CASE_INSENSITIVE))
    }
}
