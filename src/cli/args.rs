//! CLI argument definitions using clap.
//!
//! A single command: scan the given files, directories or globs for inline
//! suppression directives of the selected tools.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("output").args(["quiet", "count", "json"])))]
pub struct Arguments {
    /// Files, directories or glob patterns to scan
    #[arg(value_name = "FILE", required = true)]
    pub paths: Vec<String>,

    /// Comma-separated tools to check for, e.g. pylint,mypy
    #[arg(long, value_name = "LIST")]
    pub tools: String,

    /// Comma-separated glob patterns of files to skip
    #[arg(long, value_name = "PATTERNS", value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Comma-separated patterns of directives to allow
    #[arg(long, value_name = "PATTERNS", value_delimiter = ',')]
    pub allow: Vec<String>,

    /// Print nothing, only set the exit code
    #[arg(short, long)]
    pub quiet: bool,

    /// Print only the number of findings
    #[arg(short, long)]
    pub count: bool,

    /// Print findings as JSON
    #[arg(long)]
    pub json: bool,

    /// Print scanned files and a summary
    #[arg(short, long, conflicts_with = "output")]
    pub verbose: bool,

    /// Stop at the first finding
    #[arg(long, conflicts_with = "warn_only")]
    pub fail_fast: bool,

    /// Report findings but exit 0
    #[arg(long)]
    pub warn_only: bool,

    /// Use this config file instead of searching for one
    #[arg(long, value_name = "PATH", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore any config file
    #[arg(long)]
    pub no_config: bool,
}

/// How findings are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Plain,
    Json,
    Count,
    Quiet,
}

impl Arguments {
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else if self.count {
            OutputMode::Count
        } else if self.json {
            OutputMode::Json
        } else {
            OutputMode::Plain
        }
    }
}
