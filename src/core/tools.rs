//! Tool registry: which directives each tool understands, which files it
//! applies to, and which comment syntax its directives live in.
//!
//! The registry is a static table of [`ToolEntry`] records, one row per
//! [`Tool`] variant.

use std::{collections::BTreeSet, fmt, str::FromStr};

use anyhow::{Result, bail};
use serde::Serialize;

/// Comment syntax a tool's directives are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentSyntax {
    /// `# comment` (Python, YAML, TOML).
    Hash,
    /// `// comment` and `/* comment */` (C, C++, Objective-C).
    CStyle,
    /// `<!-- comment -->` (Markdown).
    HtmlComment,
    /// A preprocessor line starting with `#pragma`.
    PragmaLine,
}

/// Where a directive pattern is allowed to match inside its candidate text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Anywhere in the comment text.
    Anywhere,
    /// Only at the start of the line, after optional whitespace.
    LineStart,
}

/// A single suppression form recognised for a tool.
#[derive(Debug, Clone, Copy)]
pub struct DirectivePattern {
    /// Canonical spelling reported in findings.
    pub label: &'static str,
    /// Case-insensitive regex body for the directive itself.
    pub body: &'static str,
    /// Reject the match when the directive continues with `-`, so
    /// `disable` never swallows `disable-next`.
    pub standalone: bool,
    pub anchor: Anchor,
}

impl DirectivePattern {
    const fn anywhere(label: &'static str, body: &'static str) -> Self {
        Self {
            label,
            body,
            standalone: false,
            anchor: Anchor::Anywhere,
        }
    }

    const fn standalone(label: &'static str, body: &'static str) -> Self {
        Self {
            label,
            body,
            standalone: true,
            anchor: Anchor::Anywhere,
        }
    }

    const fn line_start(label: &'static str, body: &'static str) -> Self {
        Self {
            label,
            body,
            standalone: false,
            anchor: Anchor::LineStart,
        }
    }
}

/// Static description of one tool.
#[derive(Debug)]
pub struct ToolEntry {
    pub tool: Tool,
    pub syntax: CommentSyntax,
    /// Lowercase extensions including the leading dot.
    pub extensions: &'static [&'static str],
    /// Suppression forms, most specific first.
    pub patterns: &'static [DirectivePattern],
    /// Enable/restore forms. A suppression occurrence that starts where one of
    /// these starts is not a suppression.
    pub enables: &'static [&'static str],
}

/// Supported tools, in registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    ClangDiagnostic,
    ClangFormat,
    ClangTidy,
    Coverage,
    Markdownlint,
    Mypy,
    Pylint,
    Yamllint,
}

const C_EXTENSIONS: &[&str] = &[
    ".c", ".cc", ".cpp", ".cxx", ".h", ".hpp", ".hxx", ".m", ".mm",
];

// `.toml` is included for the Python tools so pyproject.toml comments are checked.
const PYTHON_EXTENSIONS: &[&str] = &[".py", ".toml"];

const YAML_EXTENSIONS: &[&str] = &[".yaml", ".yml", ".toml"];

const MARKDOWN_EXTENSIONS: &[&str] = &[".md"];

static REGISTRY: [ToolEntry; 8] = [
    ToolEntry {
        tool: Tool::ClangDiagnostic,
        syntax: CommentSyntax::PragmaLine,
        extensions: C_EXTENSIONS,
        patterns: &[DirectivePattern::line_start(
            "#pragma clang diagnostic ignored",
            r"#\s*pragma\s+clang\s+diagnostic\s+ignored",
        )],
        enables: &[],
    },
    ToolEntry {
        tool: Tool::ClangFormat,
        syntax: CommentSyntax::CStyle,
        extensions: C_EXTENSIONS,
        patterns: &[DirectivePattern::anywhere(
            "clang-format off",
            r"clang-format\s+off",
        )],
        enables: &[r"clang-format\s+on"],
    },
    ToolEntry {
        tool: Tool::ClangTidy,
        syntax: CommentSyntax::CStyle,
        extensions: C_EXTENSIONS,
        patterns: &[
            DirectivePattern::anywhere("NOLINTNEXTLINE", r"NOLINTNEXTLINE(?:\([^)]*\))?"),
            DirectivePattern::anywhere("NOLINTBEGIN", r"NOLINTBEGIN(?:\([^)]*\))?"),
            DirectivePattern::anywhere("NOLINT", r"NOLINT(?:\([^)]*\))?"),
        ],
        enables: &["NOLINTEND"],
    },
    ToolEntry {
        tool: Tool::Coverage,
        syntax: CommentSyntax::Hash,
        extensions: PYTHON_EXTENSIONS,
        patterns: &[
            DirectivePattern::anywhere("pragma: no cover", r"pragma:\s*no\s*cover"),
            DirectivePattern::anywhere("pragma: no branch", r"pragma:\s*no\s*branch"),
        ],
        enables: &[],
    },
    ToolEntry {
        tool: Tool::Markdownlint,
        syntax: CommentSyntax::HtmlComment,
        extensions: MARKDOWN_EXTENSIONS,
        patterns: &[
            DirectivePattern::anywhere(
                "markdownlint-disable-next-line",
                r"markdownlint-disable-next-line",
            ),
            DirectivePattern::anywhere("markdownlint-disable-line", r"markdownlint-disable-line"),
            DirectivePattern::anywhere("markdownlint-disable-file", r"markdownlint-disable-file"),
            DirectivePattern::anywhere("markdownlint-capture", r"markdownlint-capture"),
            DirectivePattern::anywhere(
                "markdownlint-configure-file",
                r"markdownlint-configure-file",
            ),
            DirectivePattern::standalone("markdownlint-disable", r"markdownlint-disable"),
        ],
        enables: &["markdownlint-enable", "markdownlint-restore"],
    },
    ToolEntry {
        tool: Tool::Mypy,
        syntax: CommentSyntax::Hash,
        extensions: PYTHON_EXTENSIONS,
        patterns: &[
            DirectivePattern::anywhere("type: ignore", r"type:\s*ignore(?:\[[^\]]*\])?"),
            DirectivePattern::anywhere("mypy: ignore-errors", r"mypy:\s*ignore-errors"),
        ],
        enables: &[],
    },
    ToolEntry {
        tool: Tool::Pylint,
        syntax: CommentSyntax::Hash,
        extensions: PYTHON_EXTENSIONS,
        patterns: &[
            DirectivePattern::anywhere("pylint: disable-next", r"pylint:\s*disable-next"),
            DirectivePattern::anywhere("pylint: disable-line", r"pylint:\s*disable-line"),
            DirectivePattern::anywhere("pylint: skip-file", r"pylint:\s*skip-file"),
            DirectivePattern::standalone("pylint: disable", r"pylint:\s*disable"),
        ],
        enables: &[],
    },
    ToolEntry {
        tool: Tool::Yamllint,
        syntax: CommentSyntax::Hash,
        extensions: YAML_EXTENSIONS,
        patterns: &[
            DirectivePattern::anywhere("yamllint disable-line", r"yamllint\s+disable-line"),
            DirectivePattern::anywhere("yamllint disable-file", r"yamllint\s+disable-file"),
            DirectivePattern::standalone("yamllint disable", r"yamllint\s+disable"),
        ],
        enables: &[r"yamllint\s+enable"],
    },
];

impl Tool {
    /// All tools in registry order.
    pub const ALL: [Tool; 8] = [
        Tool::ClangDiagnostic,
        Tool::ClangFormat,
        Tool::ClangTidy,
        Tool::Coverage,
        Tool::Markdownlint,
        Tool::Mypy,
        Tool::Pylint,
        Tool::Yamllint,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::ClangDiagnostic => "clang-diagnostic",
            Tool::ClangFormat => "clang-format",
            Tool::ClangTidy => "clang-tidy",
            Tool::Coverage => "coverage",
            Tool::Markdownlint => "markdownlint",
            Tool::Mypy => "mypy",
            Tool::Pylint => "pylint",
            Tool::Yamllint => "yamllint",
        }
    }

    pub fn entry(&self) -> &'static ToolEntry {
        // Registry rows are declared in the same order as `Tool::ALL`.
        &REGISTRY[*self as usize]
    }

    pub fn patterns(&self) -> &'static [DirectivePattern] {
        self.entry().patterns
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        self.entry().extensions
    }

    pub fn comment_syntax(&self) -> CommentSyntax {
        self.entry().syntax
    }

    /// Whether this tool scans files with the given extension.
    ///
    /// `extension` may be given with or without the leading dot and in any case.
    pub fn applies_to_extension(&self, extension: &str) -> bool {
        let ext = extension.trim_start_matches('.').to_ascii_lowercase();
        self.extensions()
            .iter()
            .any(|e| e.trim_start_matches('.') == ext)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tool {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Invalid tool: {}", s))
    }
}

/// Parse a comma-separated tool list, e.g. `"pylint, mypy"`.
///
/// Entries are trimmed and empty entries dropped. Returns the tools in
/// registry order. Unknown names and an empty list are usage errors.
pub fn parse_tools(list: &str) -> Result<BTreeSet<Tool>> {
    let names: BTreeSet<&str> = list
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();

    let invalid: Vec<&str> = names
        .iter()
        .copied()
        .filter(|name| name.parse::<Tool>().is_err())
        .collect();
    if !invalid.is_empty() {
        bail!(
            "Invalid tool(s): {}. Valid options: {}",
            invalid.join(", "),
            valid_tool_names()
        );
    }

    if names.is_empty() {
        bail!("At least one tool must be specified");
    }

    names.into_iter().map(|name| name.parse::<Tool>()).collect()
}

/// Comma-separated list of every tool name, alphabetical.
pub fn valid_tool_names() -> String {
    Tool::ALL
        .iter()
        .map(Tool::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Subset of `tools` that scan files with `extension`, in registry order.
pub fn tools_for_extension<'a>(
    extension: &str,
    tools: impl IntoIterator<Item = &'a Tool>,
) -> Vec<Tool> {
    let mut applicable: Vec<Tool> = tools
        .into_iter()
        .copied()
        .filter(|tool| tool.applies_to_extension(extension))
        .collect();
    applicable.sort();
    applicable.dedup();
    applicable
}
