//! Directive matching over extracted comment text.
//!
//! Patterns come from the tool registry and are compiled once. Matching is
//! case-insensitive; whitespace tolerance is part of each pattern body.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::tools::{Anchor, DirectivePattern, Tool};

/// A suppression directive found in comment text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectiveMatch<'a> {
    /// Canonical directive spelling, e.g. `pylint: disable`.
    pub label: &'static str,
    /// Text that triggered the match, e.g. `PYLINT:   disable`.
    pub snippet: &'a str,
}

struct CompiledPattern {
    label: &'static str,
    regex: Regex,
}

struct CompiledTool {
    patterns: Vec<CompiledPattern>,
    enables: Vec<Regex>,
}

static COMPILED: LazyLock<Vec<CompiledTool>> =
    LazyLock::new(|| Tool::ALL.iter().map(compile_tool).collect());

fn compile_tool(tool: &Tool) -> CompiledTool {
    let entry = tool.entry();
    CompiledTool {
        patterns: entry.patterns.iter().map(compile_pattern).collect(),
        enables: entry
            .enables
            .iter()
            .map(|body| Regex::new(&format!(r"(?i)^(?:{body})")).unwrap())
            .collect(),
    }
}

fn compile_pattern(pattern: &DirectivePattern) -> CompiledPattern {
    let anchor = match pattern.anchor {
        Anchor::Anywhere => "",
        Anchor::LineStart => r"^\s*",
    };
    let tail = if pattern.standalone { "(?:[^-]|$)" } else { "" };
    let source = format!("(?i){anchor}({body}){tail}", body = pattern.body);
    CompiledPattern {
        label: pattern.label,
        regex: Regex::new(&source).unwrap(),
    }
}

impl CompiledTool {
    /// True when an enable form starts at byte `start` of `text`.
    fn is_enable_at(&self, text: &str, start: usize) -> bool {
        self.enables.iter().any(|re| re.is_match(&text[start..]))
    }

    fn find_in<'a>(&self, pattern: &CompiledPattern, text: &'a str) -> Option<&'a str> {
        pattern
            .regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .find(|m| !self.is_enable_at(text, m.start()))
            .map(|m| m.as_str())
    }
}

/// Find the first suppression directive for `tool` in `comments`.
///
/// Patterns are tried in registry order; for each pattern every comment is
/// searched before moving on. An occurrence that is the start of one of the
/// tool's enable forms is skipped.
pub fn find_directive<'a>(comments: &[&'a str], tool: Tool) -> Option<DirectiveMatch<'a>> {
    let compiled = &COMPILED[tool as usize];

    compiled.patterns.iter().find_map(|pattern| {
        comments.iter().find_map(|comment| {
            compiled
                .find_in(pattern, comment)
                .map(|snippet| DirectiveMatch {
                    label: pattern.label,
                    snippet,
                })
        })
    })
}
