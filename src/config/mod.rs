// src/config/mod.rs

//! Configuration loading and validation for procrun.
//!
//! - `model.rs` defines the TOML-backed data model and the runtime
//!   [`RunnerConfig`] view.
//! - `loader.rs` reads a config file from disk.
//! - `validate.rs` checks environment names and the working directory.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{ConfigFile, RawConfigFile, RunnerConfig, RunnerSection};
pub use validate::validate_env_key;
