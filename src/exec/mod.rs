// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`spec`] describes a command ([`CommandSpec`]).
//! - [`launcher`] spawns it via `tokio::process::Command` and hands back a
//!   [`ProcessHandle`].
//! - [`collector`] drains stdout/stderr while waiting for exit and produces
//!   a [`ProcessOutput`].
//! - [`runner`] and [`blocking`] compose the two for everyday use.

pub mod blocking;
pub mod collector;
pub mod launcher;
pub mod output;
pub mod runner;
pub mod spec;

pub use blocking::BlockingRunner;
pub use collector::collect;
pub use launcher::{ProcessHandle, start};
pub use output::ProcessOutput;
pub use runner::ProcessRunner;
pub use spec::CommandSpec;
