// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{ProcrunError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::ProcrunError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.runner, raw.env))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_runner_section(cfg)?;
    validate_env(cfg)?;
    Ok(())
}

fn validate_runner_section(cfg: &RawConfigFile) -> Result<()> {
    if let Some(dir) = &cfg.runner.working_dir {
        if dir.as_os_str().is_empty() {
            return Err(ProcrunError::ConfigError(
                "[runner].working_dir must not be empty".to_string(),
            ));
        }
    }
    Ok(())
}

fn validate_env(cfg: &RawConfigFile) -> Result<()> {
    for (key, value) in cfg.env.iter() {
        validate_env_key(key)?;
        if value.contains('\0') {
            return Err(ProcrunError::ConfigError(format!(
                "[env].{key} contains a NUL byte"
            )));
        }
    }
    Ok(())
}

/// Check that `key` can be used as an environment variable name.
///
/// Empty names, names containing `=` and names containing NUL are rejected;
/// the OS cannot represent any of them.
pub fn validate_env_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(ProcrunError::ConfigError(
            "environment variable name must not be empty".to_string(),
        ));
    }
    if key.contains('=') {
        return Err(ProcrunError::ConfigError(format!(
            "environment variable name '{key}' must not contain '='"
        )));
    }
    if key.contains('\0') {
        return Err(ProcrunError::ConfigError(format!(
            "environment variable name '{}' contains a NUL byte",
            key.escape_debug()
        )));
    }
    Ok(())
}
