// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::validate_env_key;

/// Command-line arguments for `procrun`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "procrun",
    version,
    about = "Run a command, capture its stdout/stderr and pass its exit code through.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a config file (TOML) with runner defaults.
    ///
    /// If omitted, `Procrun.toml` in the current directory is used when it
    /// exists.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Extra environment variable for the command (repeatable).
    #[arg(long = "env", value_name = "KEY=VALUE", value_parser = parse_env_pair)]
    pub env: Vec<(String, String)>,

    /// Directory to start the command in.
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PROCRUN_LOG` is used, falling back to `warn`.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Only print the command's stdout and always exit 0.
    #[arg(long)]
    pub stdout_only: bool,

    /// The command to run, followed by its arguments.
    #[arg(last = true, required = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

fn parse_env_pair(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    validate_env_key(key).map_err(|e| e.to_string())?;
    Ok((key.to_string(), value.to_string()))
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
