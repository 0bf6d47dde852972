// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Load a configuration file and return the raw, unvalidated `RawConfigFile`.
///
/// Relative paths are left untouched. Use [`load_and_validate`] for the
/// checked version.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file, resolve `[runner].working_dir` against the
/// file's directory and validate the result.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let mut raw_config = load_from_path(path)?;

    if let Some(dir) = raw_config.runner.working_dir.take() {
        raw_config.runner.working_dir = Some(resolve_against(config_root_dir(path), dir));
    }

    ConfigFile::try_from(raw_config)
}

/// Default config location: `Procrun.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Procrun.toml")
}

fn config_root_dir(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn resolve_against(base: PathBuf, dir: PathBuf) -> PathBuf {
    // An empty path is left as-is so validation can report it.
    if dir.is_absolute() || dir.as_os_str().is_empty() {
        dir
    } else {
        base.join(dir)
    }
}
