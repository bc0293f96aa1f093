//! Directive scanning engine.
//!
//! - `tools`: static registry of tools, their directives and extensions
//! - `comments`: per-line comment extraction for each comment syntax
//! - `matcher`: suppression directive matching over comment text
//! - `patterns`: exclude and allow predicates
//! - `file_selector`: path arguments to an ordered file list
//! - `scanner`: ties the above together for a [`ScanRequest`]

pub mod comments;
pub mod file_selector;
pub mod matcher;
pub mod patterns;
pub mod scanner;
pub mod tools;

pub use scanner::{ScanRequest, scan, scan_source};
pub use tools::{Tool, parse_tools};
