//! assert-no-inline-directives - reject inline linter suppressions in CI
//!
//! Scans source files for inline directives that silence linters and static
//! analysis tools (`pylint: disable`, `type: ignore`, `NOLINT`,
//! `yamllint disable`, `markdownlint-disable`, coverage pragmas, clang
//! diagnostic pragmas) and reports every occurrence.
//!
//! ## Module Structure
//!
//! - `cli`: argument parsing, output and exit status
//! - `config`: optional project config file
//! - `core`: the scanning engine (registry, extraction, matching, selection)
//! - `findings`: result records

pub mod cli;
pub mod config;
pub mod core;
pub mod findings;
