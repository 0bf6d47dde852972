// src/exec/blocking.rs

//! Synchronous front-end for callers that are not async themselves.

use std::collections::BTreeMap;

use tokio::runtime::{Builder, Runtime};

use crate::errors::Result;
use crate::exec::launcher::ProcessHandle;
use crate::exec::output::ProcessOutput;
use crate::exec::runner::ProcessRunner;
use crate::exec::spec::CommandSpec;

/// A [`ProcessRunner`] driven by a private current-thread Tokio runtime.
///
/// Every method blocks the calling thread until it is done. Do not use this
/// from inside an async context; Tokio panics on nested `block_on`. Use
/// [`ProcessRunner`] there instead.
#[derive(Debug)]
pub struct BlockingRunner {
    inner: ProcessRunner,
    rt: Runtime,
}

impl BlockingRunner {
    pub fn new(inner: ProcessRunner) -> Result<Self> {
        let rt = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { inner, rt })
    }

    pub fn runner(&self) -> &ProcessRunner {
        &self.inner
    }

    pub fn start(&self, spec: &CommandSpec) -> Result<ProcessHandle> {
        // Child processes register with the runtime's reactor on spawn.
        let _guard = self.rt.enter();
        self.inner.start(spec)
    }

    pub fn run<I, S>(&self, args: I) -> Result<ProcessHandle>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let _guard = self.rt.enter();
        self.inner.run(args)
    }

    pub fn collect(&self, handle: ProcessHandle) -> Result<ProcessOutput> {
        self.rt.block_on(self.inner.collect(handle))
    }

    pub fn run_to_completion(&self, spec: &CommandSpec) -> Result<ProcessOutput> {
        self.rt.block_on(self.inner.run_to_completion(spec))
    }

    pub fn run_and_get_stdout<I, S>(&self, args: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rt.block_on(self.inner.run_and_get_stdout(args))
    }

    pub fn run_with_fresh_runtime_instance<I, S>(
        &self,
        entry_point: &str,
        args: I,
        env: BTreeMap<String, String>,
    ) -> Result<ProcessOutput>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rt
            .block_on(self.inner.run_with_fresh_runtime_instance(entry_point, args, env))
    }
}
