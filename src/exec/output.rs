// src/exec/output.rs

/// Exit code and complete captured output of a finished process.
///
/// Built once, after the child has exited and both streams reached EOF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    code: i32,
    stdout: String,
    stderr: String,
}

impl ProcessOutput {
    pub fn new(code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Exit code as reported by the OS.
    ///
    /// On Unix a child killed by signal `n` reports `128 + n`.
    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    pub fn success(&self) -> bool {
        self.code == 0
    }

    /// Consume the output, keeping only stdout.
    pub fn into_stdout(self) -> String {
        self.stdout
    }
}
