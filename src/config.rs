use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::Deserialize;

use crate::core::patterns::is_glob_pattern;

pub const CONFIG_FILE_NAME: &str = ".no-inline-directives.json";

/// Project configuration, merged with command-line options.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Exclude patterns appended to `--exclude`.
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Allow patterns appended to `--allow`.
    #[serde(default)]
    pub allow: Vec<String>,
    /// Exit with an error when files could not be read and nothing was found.
    #[serde(default)]
    pub fail_on_read_error: bool,
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `exclude` or `allow` is invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in self.exclude.iter().filter(|p| is_glob_pattern(p)) {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'exclude': \"{}\"", pattern))?;
        }

        for pattern in self.allow.iter().filter(|p| is_glob_pattern(p)) {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'allow': \"{}\"", pattern))?;
        }

        Ok(())
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config came from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

/// Discover and load the config file, walking up from `start_dir`.
pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => load_config_file(&path),
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}

/// Load a specific config file.
pub fn load_config_file(path: &Path) -> Result<ConfigLoadResult> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.validate()?;
    Ok(ConfigLoadResult {
        config,
        path: Some(path.to_path_buf()),
    })
}
