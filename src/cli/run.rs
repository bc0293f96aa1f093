//! Turns parsed arguments and project config into a scan, and runs it.

use std::{env, path::PathBuf};

use anyhow::Result;

use super::args::{Arguments, OutputMode};
use crate::{
    config::{Config, ConfigLoadResult, load_config, load_config_file},
    core::{ScanRequest, parse_tools, scan},
    findings::ScanOutcome,
};

/// Everything needed to run a scan and present its result.
#[derive(Debug)]
pub struct Settings {
    pub request: ScanRequest,
    pub output: OutputMode,
    pub verbose: bool,
    pub warn_only: bool,
    pub fail_on_read_error: bool,
    /// Config file in effect, shown by `--verbose`.
    pub config_path: Option<PathBuf>,
}

pub fn settings(args: Arguments) -> Result<Settings> {
    let tools = parse_tools(&args.tools)?;
    let ConfigLoadResult {
        config,
        path: config_path,
    } = load(&args)?;

    let output = args.output_mode();
    let Arguments {
        paths,
        exclude,
        allow,
        verbose,
        fail_fast,
        warn_only,
        ..
    } = args;

    Ok(Settings {
        request: ScanRequest {
            paths,
            tools,
            exclude: merge(exclude, config.exclude),
            allow: merge(allow, config.allow),
            fail_fast,
        },
        output,
        verbose,
        warn_only,
        fail_on_read_error: config.fail_on_read_error,
        config_path,
    })
}

fn load(args: &Arguments) -> Result<ConfigLoadResult> {
    if args.no_config {
        return Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        });
    }
    match &args.config {
        Some(path) => load_config_file(path),
        None => load_config(&env::current_dir()?),
    }
}

/// CLI patterns first, then config patterns; blank entries dropped.
fn merge(cli: Vec<String>, config: Vec<String>) -> Vec<String> {
    cli.into_iter()
        .chain(config)
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

pub fn run(settings: &Settings) -> Result<ScanOutcome> {
    scan(&settings.request)
}
