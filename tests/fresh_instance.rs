// tests/fresh_instance.rs
//
// The "entry point" re-invoked here is a test in this very binary. It only
// does something when the marker variable is set, so in a normal test run
// it passes trivially.

mod common;
use crate::common::{env_map, init_tracing, with_timeout};

use std::error::Error;

use procrun::exec::{BlockingRunner, ProcessRunner};

type TestResult = Result<(), Box<dyn Error>>;

const CHILD_MARKER: &str = "PROCRUN_FRESH_INSTANCE_CHILD";
const CHILD_PAYLOAD: &str = "PROCRUN_FRESH_INSTANCE_PAYLOAD";

const HARNESS_ARGS: [&str; 2] = ["--exact", "--nocapture"];

#[test]
fn fresh_instance_entry_echo() {
    if std::env::var_os(CHILD_MARKER).is_none() {
        return;
    }
    let payload = std::env::var(CHILD_PAYLOAD).unwrap_or_default();
    println!("fresh-instance-payload={payload}");
}

#[test]
fn fresh_instance_entry_fail() {
    if std::env::var_os(CHILD_MARKER).is_none() {
        return;
    }
    panic!("fresh instance asked to fail");
}

#[tokio::test]
async fn fresh_instance_reaches_entry_point_with_env() -> TestResult {
    init_tracing();

    let runner = ProcessRunner::new();
    let output = with_timeout(runner.run_with_fresh_runtime_instance(
        "fresh_instance_entry_echo",
        HARNESS_ARGS,
        env_map(&[(CHILD_MARKER, "1"), (CHILD_PAYLOAD, "from-parent")]),
    ))
    .await?;

    assert_eq!(output.code(), 0, "stderr: {}", output.stderr());
    assert!(
        output.stdout().contains("fresh-instance-payload=from-parent"),
        "stdout: {}",
        output.stdout()
    );
    Ok(())
}

#[tokio::test]
async fn fresh_instance_failure_is_reported_through_exit_code() -> TestResult {
    init_tracing();

    let runner = ProcessRunner::new();
    let output = with_timeout(runner.run_with_fresh_runtime_instance(
        "fresh_instance_entry_fail",
        HARNESS_ARGS,
        env_map(&[(CHILD_MARKER, "1")]),
    ))
    .await?;

    assert_ne!(output.code(), 0);
    let combined = format!("{}{}", output.stdout(), output.stderr());
    assert!(combined.contains("fresh instance asked to fail"));
    Ok(())
}

#[test]
fn blocking_fresh_instance_reaches_entry_point() -> TestResult {
    let runner = BlockingRunner::new(ProcessRunner::new())?;
    let output = runner.run_with_fresh_runtime_instance(
        "fresh_instance_entry_echo",
        HARNESS_ARGS,
        env_map(&[(CHILD_MARKER, "1"), (CHILD_PAYLOAD, "blocking")]),
    )?;

    assert_eq!(output.code(), 0);
    assert!(output.stdout().contains("fresh-instance-payload=blocking"));
    Ok(())
}
