// tests/launch.rs

mod common;
use crate::common::{init_tracing, scripts::sh, with_timeout};

use std::error::Error;

use tokio::io::AsyncWriteExt;

use procrun::errors::ProcrunError;
use procrun::exec::{CommandSpec, collect, start};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn empty_argument_list_is_rejected() {
    let result = CommandSpec::new(Vec::<String>::new());
    assert!(matches!(result, Err(ProcrunError::EmptyCommand)));
}

#[test]
fn spec_splits_program_and_args() -> TestResult {
    let spec = CommandSpec::new(["git", "status", "--short"])?;
    assert_eq!(spec.program(), "git");
    assert_eq!(spec.args(), ["status", "--short"]);
    assert_eq!(spec.arguments().len(), 3);
    assert!(spec.environment().is_none());
    assert!(spec.working_dir().is_none());
    Ok(())
}

#[test]
fn with_env_extends_and_overrides() -> TestResult {
    let spec = CommandSpec::new(["env"])?
        .with_env([("A", "1"), ("B", "2")])
        .with_env([("B", "3")]);

    let env = spec.environment().expect("env should be set");
    assert_eq!(env.get("A").map(String::as_str), Some("1"));
    assert_eq!(env.get("B").map(String::as_str), Some("3"));
    Ok(())
}

#[tokio::test]
async fn missing_executable_is_a_launch_failure() -> TestResult {
    init_tracing();

    let spec = CommandSpec::new(["definitely-not-a-real-binary-xyz"])?;
    match start(&spec) {
        Err(ProcrunError::Launch { program, source }) => {
            assert_eq!(program, "definitely-not-a-real-binary-xyz");
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        Err(e) => panic!("Expected Launch error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
    Ok(())
}

#[cfg(unix)]
#[tokio::test]
async fn environment_override_reaches_child() -> TestResult {
    init_tracing();

    let spec = sh(r#"printf '%s' "$FOO""#).with_env([("FOO", "bar")]);
    let output = with_timeout(collect(start(&spec)?)).await?;

    assert_eq!(output.code(), 0);
    assert_eq!(output.stdout(), "bar");
    Ok(())
}

#[cfg(unix)]
#[tokio::test]
async fn inherited_environment_is_kept_alongside_overrides() -> TestResult {
    init_tracing();

    let expected_path = std::env::var("PATH")?;
    let spec = sh(r#"printf '%s' "$PATH""#).with_env([("FOO", "bar")]);
    let output = with_timeout(collect(start(&spec)?)).await?;

    assert_eq!(output.stdout(), expected_path);
    Ok(())
}

#[cfg(unix)]
#[tokio::test]
async fn working_directory_override_is_used() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let spec = sh("pwd").with_working_dir(dir.path());
    let output = with_timeout(collect(start(&spec)?)).await?;

    let reported = std::fs::canonicalize(output.stdout().trim_end())?;
    assert_eq!(reported, std::fs::canonicalize(dir.path())?);
    Ok(())
}

#[cfg(unix)]
#[tokio::test]
async fn missing_working_directory_is_a_launch_failure() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let spec = sh("pwd").with_working_dir(dir.path().join("does-not-exist"));

    let err = start(&spec).expect_err("spawn in a missing directory must fail");
    assert!(err.is_launch_failure());
    assert!(!err.is_wait_failure());
    Ok(())
}

#[cfg(unix)]
#[tokio::test]
async fn caller_can_feed_stdin_before_collecting() -> TestResult {
    init_tracing();

    let mut handle = start(&CommandSpec::new(["cat"])?)?;
    assert!(handle.id().is_some());
    assert_eq!(handle.program(), "cat");

    let mut stdin = handle.take_stdin().expect("stdin is piped");
    stdin.write_all(b"ping\n").await?;
    drop(stdin);

    let output = with_timeout(collect(handle)).await?;
    assert_eq!(output.stdout(), "ping\n");
    assert_eq!(output.code(), 0);
    Ok(())
}
