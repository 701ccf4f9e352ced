pub mod types;

use crate::error::{ConfigError, Result};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".cloudopt.toml";

/// Get the global config file path (~/.cloudopt.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Get the local config file path (./.cloudopt.toml)
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

/// Read and validate a config file.
pub fn read_config_file(path: &Path) -> Result<types::Config> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    let config: types::Config =
        toml::from_str(&content).map_err(|e| ConfigError::ParsingFailed(e.to_string()))?;
    config.optimizer.validate()?;
    Ok(config)
}

/// Load configuration from file or use defaults.
///
/// An explicit path must load successfully. Otherwise the local config is
/// checked first, then the global one; unreadable files there are skipped
/// with a warning.
pub fn load_config(explicit: Option<&Path>) -> Result<types::Config> {
    if let Some(path) = explicit {
        log::info!("Loading configuration from {}", path.display());
        return read_config_file(path);
    }

    let candidates = std::env::current_dir()
        .ok()
        .map(|dir| local_config_path(&dir))
        .into_iter()
        .chain(global_config_path());

    for candidate in candidates {
        if !candidate.exists() {
            continue;
        }
        match read_config_file(&candidate) {
            Ok(config) => {
                log::info!("Loaded configuration from {}", candidate.display());
                return Ok(config);
            }
            Err(e) => log::warn!("Ignoring {}: {}", candidate.display(), e),
        }
    }

    Ok(types::Config::default())
}
