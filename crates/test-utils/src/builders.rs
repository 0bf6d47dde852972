#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::PathBuf;

use procrun::config::RunnerConfig;

/// Builder for `RunnerConfig` to simplify test setup.
pub struct RunnerConfigBuilder {
    config: RunnerConfig,
}

impl RunnerConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: RunnerConfig {
                env: BTreeMap::new(),
                working_dir: None,
                trace_stdout: true,
            },
        }
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.config.env.insert(key.to_string(), value.to_string());
        self
    }

    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.working_dir = Some(dir.into());
        self
    }

    pub fn trace_stdout(mut self, val: bool) -> Self {
        self.config.trace_stdout = val;
        self
    }

    pub fn build(self) -> RunnerConfig {
        self.config
    }
}

impl Default for RunnerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
