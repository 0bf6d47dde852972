// src/exec/runner.rs

//! Convenience layer over [`start`] and [`collect`].
//!
//! A [`ProcessRunner`] carries two things the bare functions don't:
//! - runner-wide defaults ([`RunnerConfig`]) layered under every spec,
//! - its own `tracing` span, so callers decide where the runner's logs are
//!   attributed instead of relying on any global logger.

use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::{Instrument, Span, debug};

use crate::config::RunnerConfig;
use crate::errors::{ProcrunError, Result};
use crate::exec::collector::collect;
use crate::exec::launcher::{ProcessHandle, start};
use crate::exec::output::ProcessOutput;
use crate::exec::spec::CommandSpec;

#[derive(Debug, Clone)]
pub struct ProcessRunner {
    config: RunnerConfig,
    span: Span,
}

impl ProcessRunner {
    /// Runner with no defaults: inherited environment and working directory.
    pub fn new() -> Self {
        Self::from_config(RunnerConfig::default())
    }

    pub fn from_config(config: RunnerConfig) -> Self {
        Self {
            config,
            span: tracing::debug_span!("process_runner"),
        }
    }

    /// Attribute this runner's events to `span`.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Start `spec` with the runner defaults layered underneath it.
    pub fn start(&self, spec: &CommandSpec) -> Result<ProcessHandle> {
        let _enter = self.span.enter();
        start(&spec.layered_over(&self.config))
    }

    /// Start a command given only its arguments.
    pub fn run<I, S>(&self, args: I) -> Result<ProcessHandle>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.start(&CommandSpec::new(args)?)
    }

    pub async fn collect(&self, handle: ProcessHandle) -> Result<ProcessOutput> {
        collect(handle).instrument(self.span.clone()).await
    }

    /// Collect `handle` and return only its stdout.
    pub async fn stdout_of(&self, handle: ProcessHandle) -> Result<String> {
        let stdout = self.collect(handle).await?.into_stdout();
        if self.config.trace_stdout {
            self.span.in_scope(|| debug!(stdout = %stdout, "process stdout"));
        }
        Ok(stdout)
    }

    /// Start `spec` and wait for its complete output.
    pub async fn run_to_completion(&self, spec: &CommandSpec) -> Result<ProcessOutput> {
        let handle = self.start(spec)?;
        self.collect(handle).await
    }

    pub async fn run_and_get_stdout<I, S>(&self, args: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let handle = self.run(args)?;
        self.stdout_of(handle).await
    }

    /// Re-invoke the current executable with `entry_point` as its first
    /// argument, followed by `args`, under the extra environment `env`.
    ///
    /// Meant for black-box tests of the hosting binary's own entry points:
    /// the child runs the exact same build as the caller, in isolation.
    pub async fn run_with_fresh_runtime_instance<I, S>(
        &self,
        entry_point: &str,
        args: I,
        env: BTreeMap<String, String>,
    ) -> Result<ProcessOutput>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let spec = fresh_instance_spec(entry_point, args, env)?;
        self.run_to_completion(&spec).await
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

fn fresh_instance_spec<I, S>(
    entry_point: &str,
    args: I,
    env: BTreeMap<String, String>,
) -> Result<CommandSpec>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let exe = utf8_path(std::env::current_exe()?)?;

    let mut cmd = vec![exe, entry_point.to_string()];
    cmd.extend(args.into_iter().map(Into::into));

    Ok(CommandSpec::new(cmd)?.with_env(env))
}

/// Arguments are UTF-8 strings, so a path that isn't one can't be passed on
/// without changing which file it names.
fn utf8_path(path: PathBuf) -> Result<String> {
    path.into_os_string()
        .into_string()
        .map_err(|raw| ProcrunError::NonUtf8Path(PathBuf::from(raw)))
}
