// src/errors.rs

//! Crate-wide error type and `Result` alias.
//!
//! The execution core only ever produces three of these:
//! - [`ProcrunError::EmptyCommand`] when a [`CommandSpec`] is built without
//!   any arguments,
//! - [`ProcrunError::Launch`] when the OS refuses to create the process,
//! - [`ProcrunError::Wait`] when waiting for (or draining) a running process
//!   fails.
//!
//! A non-zero exit code is **not** an error; it is reported in
//! [`ProcessOutput::code`].
//!
//! [`CommandSpec`]: crate::exec::CommandSpec
//! [`ProcessOutput::code`]: crate::exec::ProcessOutput::code

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcrunError {
    #[error("command must contain at least one argument (the executable)")]
    EmptyCommand,

    #[error("failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed while waiting for '{program}': {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(std::path::PathBuf),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl ProcrunError {
    /// True for failures raised while creating the process.
    pub fn is_launch_failure(&self) -> bool {
        matches!(self, ProcrunError::Launch { .. })
    }

    /// True for failures raised while waiting for the process to finish.
    pub fn is_wait_failure(&self) -> bool {
        matches!(self, ProcrunError::Wait { .. })
    }
}

pub type Result<T> = std::result::Result<T, ProcrunError>;
