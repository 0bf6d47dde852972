//! Small `sh` scripts used as child processes in tests.
//!
//! These assume a POSIX shell, so callers gate their tests with
//! `#[cfg(unix)]`.

use procrun::exec::CommandSpec;

/// `sh -c <script>`.
pub fn sh(script: &str) -> CommandSpec {
    CommandSpec::new(["sh", "-c", script]).expect("non-empty argument list")
}

/// Write `bytes` bytes of `a` to stdout and `bytes` bytes of `b` to stderr,
/// from two concurrent writers.
pub fn flood_both_streams(bytes: usize) -> CommandSpec {
    sh(&format!(
        "head -c {bytes} /dev/zero | tr '\\0' a & \
         head -c {bytes} /dev/zero | tr '\\0' b >&2 & \
         wait"
    ))
}

/// Exit with `code` after printing one line on each stream.
pub fn exit_with(code: i32) -> CommandSpec {
    sh(&format!("echo out; echo err >&2; exit {code}"))
}
