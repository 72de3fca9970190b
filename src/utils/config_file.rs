//! Load the `key=value` config file (CLI only). Lib callers pass roots and [`LinkOpts`](crate::LinkOpts) directly.

use anyhow::{Context, Result, bail};
use log::debug;
use std::path::{Path, PathBuf};

use crate::utils::config::{LOG_FILE_KEY, MEDIA_DIR_KEY, SYMLINK_DIR_KEY, WORKERS_KEY};

/// Settings read from the config file. Empty values are kept as `Some("")` so the caller can
/// tell "present but empty" from "missing"; both are rejected for the roots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub media_dir: Option<String>,
    pub symlink_dir: Option<String>,
    pub workers: Option<usize>,
    pub log_file: Option<PathBuf>,
}

/// Parse `path` as `key=value` lines. Each line is split on the first `=` and both sides are
/// trimmed; values are taken literally (spaces, `$` and backslashes included).
/// Blank lines and lines starting with `#` are ignored; any other line without `=` is an error.
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read config file {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path.display()))
}

/// Parse config file contents. See [`load_config_file`].
pub fn parse_config(contents: &str) -> Result<ConfigFile> {
    let mut file = ConfigFile::default();
    for (lineno, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            bail!("line {}: expected key=value, got {line:?}", lineno + 1);
        };
        let value = value.trim().to_string();
        match key.trim() {
            MEDIA_DIR_KEY => file.media_dir = Some(value),
            SYMLINK_DIR_KEY => file.symlink_dir = Some(value),
            WORKERS_KEY => {
                let n = value.parse::<usize>().with_context(|| {
                    format!("line {}: invalid {WORKERS_KEY} value {value:?}", lineno + 1)
                })?;
                file.workers = Some(n);
            }
            LOG_FILE_KEY if !value.is_empty() => file.log_file = Some(PathBuf::from(value)),
            other => debug!("config line {}: ignoring key {other:?}", lineno + 1),
        }
    }
    Ok(file)
}

/// `Some(path)` when `value` is present and not blank.
pub fn non_empty_path(value: Option<&str>) -> Option<PathBuf> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
