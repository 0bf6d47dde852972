// src/exec/launcher.rs

//! Turn a [`CommandSpec`] into a running OS process.

use std::process::Stdio;

use tokio::process::{Child, ChildStdin, Command};
use tracing::debug;

use crate::errors::{ProcrunError, Result};
use crate::exec::spec::CommandSpec;

/// A live child process together with its piped streams.
///
/// The handle is consumed by [`collect`](crate::exec::collect), so a process
/// is collected at most once.
#[derive(Debug)]
pub struct ProcessHandle {
    pub(crate) program: String,
    pub(crate) child: Child,
}

impl ProcessHandle {
    /// The executable this handle was started from.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// OS process id, if the child has not been reaped yet.
    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }

    /// Take the write end of the child's stdin.
    ///
    /// If the caller never takes it, stdin is closed when collection begins.
    pub fn take_stdin(&mut self) -> Option<ChildStdin> {
        self.child.stdin.take()
    }
}

/// Spawn the process described by `spec` and return immediately.
///
/// stdin, stdout and stderr are piped. Environment overrides are layered on
/// top of the inherited environment, and the working directory is only
/// changed when the spec sets one.
///
/// Must be called from within a Tokio runtime context.
pub fn start(spec: &CommandSpec) -> Result<ProcessHandle> {
    debug!(
        args = ?spec.arguments(),
        env = ?spec.environment(),
        working_dir = ?spec.working_dir(),
        "forking process"
    );

    let mut cmd = Command::new(spec.program());
    cmd.args(spec.args());

    if let Some(env) = spec.environment() {
        cmd.envs(env);
    }
    if let Some(dir) = spec.working_dir() {
        cmd.current_dir(dir);
    }

    cmd.stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let child = cmd.spawn().map_err(|source| ProcrunError::Launch {
        program: spec.program().to_string(),
        source,
    })?;

    debug!(program = %spec.program(), pid = ?child.id(), "process started");

    Ok(ProcessHandle {
        program: spec.program().to_string(),
        child,
    })
}
