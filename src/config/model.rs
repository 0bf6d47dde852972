// src/config/model.rs

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [runner]
/// working_dir = "build"
/// trace_stdout = true
///
/// [env]
/// GOPATH = "/opt/go"
/// GO111MODULE = "on"
/// ```
///
/// Both sections are optional.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    /// Runner behaviour from `[runner]`.
    #[serde(default)]
    pub runner: RunnerSection,

    /// Default environment overrides from `[env]`.
    ///
    /// These are layered on top of the inherited environment for every
    /// command the runner starts; a command's own overrides win.
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

/// `[runner]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct RunnerSection {
    /// Directory commands start in when they don't set one themselves.
    ///
    /// Relative paths are resolved against the directory of the config file
    /// by [`load_and_validate`](crate::config::load_and_validate).
    #[serde(default)]
    pub working_dir: Option<PathBuf>,

    /// Emit a debug trace of stdout from `run_and_get_stdout`.
    #[serde(default = "default_trace_stdout")]
    pub trace_stdout: bool,
}

fn default_trace_stdout() -> bool {
    true
}

impl Default for RunnerSection {
    fn default() -> Self {
        Self {
            working_dir: None,
            trace_stdout: default_trace_stdout(),
        }
    }
}

/// Validated configuration.
///
/// Only obtainable through `TryFrom<RawConfigFile>`, so holding one means the
/// environment keys and working directory have been checked.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    runner: RunnerSection,
    env: BTreeMap<String, String>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(runner: RunnerSection, env: BTreeMap<String, String>) -> Self {
        Self { runner, env }
    }

    pub fn runner(&self) -> &RunnerSection {
        &self.runner
    }

    pub fn env(&self) -> &BTreeMap<String, String> {
        &self.env
    }

    /// Runtime view consumed by [`ProcessRunner`](crate::exec::ProcessRunner).
    pub fn runner_config(&self) -> RunnerConfig {
        RunnerConfig {
            env: self.env.clone(),
            working_dir: self.runner.working_dir.clone(),
            trace_stdout: self.runner.trace_stdout,
        }
    }
}

/// Defaults a runner applies to every command it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub env: BTreeMap<String, String>,
    pub working_dir: Option<PathBuf>,
    pub trace_stdout: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            env: BTreeMap::new(),
            working_dir: None,
            trace_stdout: default_trace_stdout(),
        }
    }
}
