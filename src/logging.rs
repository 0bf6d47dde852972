// src/logging.rs

//! Logging setup for the `procrun` binary.
//!
//! `procrun` forwards the child's stdout and stderr verbatim, and its own
//! logs share stderr with the forwarded output. The default level is
//! therefore `warn`: a plain `procrun -- cmd` only adds lines to stderr when
//! something went wrong.
//!
//! Level selection, first match wins:
//! 1. `--log-level` on the command line,
//! 2. `PROCRUN_LOG`, which takes full `EnvFilter` directives
//!    (e.g. `debug` or `procrun::exec=trace`),
//! 3. `warn`.
//!
//! The library never installs a subscriber; that is up to the host.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;

const LOG_ENV: &str = "PROCRUN_LOG";
const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the global subscriber for the binary, writing to stderr.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let filter = build_filter(cli_level, std::env::var(LOG_ENV).ok().as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

fn build_filter(cli_level: Option<LogLevel>, env_directives: Option<&str>) -> Result<EnvFilter> {
    if let Some(level) = cli_level {
        return Ok(EnvFilter::new(directive_for(level)));
    }

    match env_directives.map(str::trim).filter(|s| !s.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid {LOG_ENV} value '{directives}'")),
        None => Ok(EnvFilter::new(DEFAULT_DIRECTIVE)),
    }
}

fn directive_for(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}
