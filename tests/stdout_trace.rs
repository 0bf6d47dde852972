// tests/stdout_trace.rs
//
// No `init_tracing()` here: each test installs its own thread-local capture,
// which must not compete with a global subscriber.

#![cfg(unix)]

use std::error::Error;

use procrun::exec::ProcessRunner;
use procrun_test_utils::builders::RunnerConfigBuilder;
use procrun_test_utils::{LogCapture, with_timeout};

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn run_and_get_stdout_traces_stdout_at_debug() -> TestResult {
    let logs = LogCapture::start("procrun=debug");

    let runner = ProcessRunner::new();
    assert!(runner.config().trace_stdout);

    let stdout = with_timeout(runner.run_and_get_stdout(["echo", "traced-output"])).await?;
    assert_eq!(stdout, "traced-output\n");

    let logs = logs.contents();
    assert!(logs.contains("process stdout"), "logs: {logs}");
    assert!(logs.contains("traced-output"), "logs: {logs}");
    assert!(logs.contains("DEBUG"), "logs: {logs}");
    Ok(())
}

#[tokio::test]
async fn stdout_trace_is_hidden_above_debug() -> TestResult {
    let logs = LogCapture::start("procrun=info");

    let runner = ProcessRunner::new();
    with_timeout(runner.run_and_get_stdout(["echo", "traced-output"])).await?;

    assert!(!logs.contents().contains("process stdout"));
    Ok(())
}

#[tokio::test]
async fn stdout_trace_can_be_turned_off() -> TestResult {
    let logs = LogCapture::start("procrun=debug");

    let runner = ProcessRunner::from_config(RunnerConfigBuilder::new().trace_stdout(false).build());
    assert!(!runner.config().trace_stdout);

    let stdout = with_timeout(runner.run_and_get_stdout(["echo", "untraced-output"])).await?;
    assert_eq!(stdout, "untraced-output\n");

    let logs = logs.contents();
    assert!(!logs.contains("process stdout"), "logs: {logs}");
    // Launcher and collector events are still there.
    assert!(logs.contains("process collected"), "logs: {logs}");
    Ok(())
}

#[tokio::test]
async fn events_are_attributed_to_the_runner_span() -> TestResult {
    let logs = LogCapture::start("procrun=debug,stdout_trace=debug");

    let runner =
        ProcessRunner::new().with_span(tracing::debug_span!("toolchain_invocation", tool = "go"));
    assert_eq!(
        runner.span().metadata().map(|m| m.name()),
        Some("toolchain_invocation")
    );

    with_timeout(runner.run_and_get_stdout(["echo", "spanned"])).await?;

    let logs = logs.contents();
    assert!(logs.contains("toolchain_invocation"), "logs: {logs}");
    assert!(logs.contains("tool=\"go\""), "logs: {logs}");
    Ok(())
}
