// src/lib.rs

//! Launch external processes, capture their complete stdout/stderr and wait
//! for them to exit.
//!
//! ```no_run
//! # async fn demo() -> procrun::errors::Result<()> {
//! use procrun::exec::{CommandSpec, ProcessRunner};
//!
//! let runner = ProcessRunner::new();
//! let spec = CommandSpec::new(["git", "rev-parse", "HEAD"])?.with_working_dir("/src/repo");
//! let output = runner.run_to_completion(&spec).await?;
//! println!("exit {}: {}", output.code(), output.stdout());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;

use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::{RunnerConfig, default_config_path, load_and_validate};
use crate::exec::{CommandSpec, ProcessRunner};

/// High-level entry point used by `main.rs`.
///
/// Loads runner defaults, runs the requested command to completion, forwards
/// its captured output and returns the exit code `procrun` should exit with.
pub async fn run(args: CliArgs) -> Result<i32> {
    let config = runner_config(&args)?;
    let runner = ProcessRunner::from_config(config);

    let mut spec = CommandSpec::new(args.command)?.with_env(args.env);
    if let Some(dir) = args.cwd {
        spec = spec.with_working_dir(dir);
    }

    if args.stdout_only {
        let handle = runner.start(&spec)?;
        let stdout = runner.stdout_of(handle).await?;
        print_flush(&stdout)?;
        return Ok(0);
    }

    debug!(args = ?spec.arguments(), "running command");
    let output = runner.run_to_completion(&spec).await?;
    debug!(exit_code = output.code(), "command finished");

    print_flush(output.stdout())?;
    eprint!("{}", output.stderr());

    Ok(output.code())
}

/// Pick the runner config: explicit `--config`, else `Procrun.toml` if it
/// exists, else defaults.
fn runner_config(args: &CliArgs) -> Result<RunnerConfig> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => {
            let path = default_config_path();
            if !path.exists() {
                debug!("no config file; using runner defaults");
                return Ok(RunnerConfig::default());
            }
            path
        }
    };

    let cfg = load_and_validate(&path)
        .with_context(|| format!("loading config from '{}'", path.display()))?;
    Ok(cfg.runner_config())
}

fn print_flush(s: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(s.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
