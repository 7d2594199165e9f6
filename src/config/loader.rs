use std::fs;
use std::path::{Path, PathBuf};

use super::core::RankConfig;
use crate::errors::{RankError, Result};

/// File name searched for by [`load_config`].
pub const CONFIG_FILE_NAME: &str = ".rankcalc.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str, path: &Path) -> Result<RankConfig> {
    let config = toml::from_str::<RankConfig>(contents).map_err(|e| RankError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    config.validate()?;
    Ok(config)
}

/// Load one explicit config file. Unlike [`load_config`], failures are
/// returned instead of falling back to defaults.
pub fn load_config_from_path(path: &Path) -> Result<RankConfig> {
    let contents = fs::read_to_string(path).map_err(|e| RankError::io(path, e))?;
    let config = parse_and_validate_config(&contents, path)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Load a discovered config file. Missing files are expected; anything else
/// that goes wrong is logged and the file is skipped.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<RankConfig> {
    match load_config_from_path(config_path) {
        Ok(config) => Some(config),
        Err(RankError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => {
            log::warn!("{}. Ignoring {}.", e, config_path.display());
            None
        }
    }
}

/// `start` and at most `max_depth - 1` of its ancestors, nearest first.
pub fn directory_ancestors(start: &Path, max_depth: usize) -> Vec<PathBuf> {
    start
        .ancestors()
        .take(max_depth)
        .map(Path::to_path_buf)
        .collect()
}

/// Search `start` and its ancestors for `.rankcalc.toml`.
pub fn load_config_from(start: PathBuf) -> RankConfig {
    directory_ancestors(&start, MAX_TRAVERSAL_DEPTH)
        .into_iter()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            RankConfig::default()
        })
}

/// Search the current directory and its ancestors for `.rankcalc.toml`.
pub fn load_config() -> RankConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            RankConfig::default()
        }
    }
}
