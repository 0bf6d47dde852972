// src/exec/collector.rs

//! Drain a running process and wait for it to exit.
//!
//! stdout and stderr are separate pipes with bounded kernel buffers. A child
//! that fills one of them blocks until somebody reads it, so waiting for exit
//! first (or reading one stream to the end before the other) can deadlock.
//! [`collect`] therefore drives three futures together: one reader per
//! stream plus the exit wait, and only builds the [`ProcessOutput`] once all
//! three have finished.

use std::process::ExitStatus;

use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::debug;

use crate::errors::{ProcrunError, Result};
use crate::exec::launcher::ProcessHandle;
use crate::exec::output::ProcessOutput;

/// Block (asynchronously) until the process has exited and both output
/// streams are exhausted.
///
/// Any failure while waiting or reading is returned as
/// [`ProcrunError::Wait`]; whatever was captured up to that point is dropped.
pub async fn collect(handle: ProcessHandle) -> Result<ProcessOutput> {
    let ProcessHandle { program, mut child } = handle;

    // Nobody is going to write to it anymore; let readers of stdin see EOF.
    drop(child.stdin.take());

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let (status, out, err) = tokio::join!(child.wait(), drain(stdout), drain(stderr));

    let wait_failed = |source: std::io::Error| ProcrunError::Wait {
        program: program.clone(),
        source,
    };
    let status = status.map_err(wait_failed)?;
    let out = out.map_err(wait_failed)?;
    let err = err.map_err(wait_failed)?;

    let code = exit_code(status);
    debug!(
        program = %program,
        exit_code = code,
        stdout_bytes = out.len(),
        stderr_bytes = err.len(),
        "process collected"
    );

    Ok(ProcessOutput::new(
        code,
        String::from_utf8_lossy(&out),
        String::from_utf8_lossy(&err),
    ))
}

async fn drain<R>(stream: Option<R>) -> std::io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::new();
    if let Some(mut stream) = stream {
        stream.read_to_end(&mut buf).await?;
    }
    Ok(buf)
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => 128 + signal,
        (None, None) => -1,
    }
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}
