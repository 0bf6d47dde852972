// src/exec/spec.rs

//! Immutable description of a command to run.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::RunnerConfig;
use crate::errors::{ProcrunError, Result};

/// A validated command: executable plus arguments, optional environment
/// overrides and an optional working directory.
///
/// `arguments()[0]` is always present and names the executable. The
/// environment overrides are merged into the inherited environment of the
/// calling process; they never replace it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    arguments: Vec<String>,
    environment: Option<BTreeMap<String, String>>,
    working_dir: Option<PathBuf>,
}

impl CommandSpec {
    /// Build a spec from an argument list.
    ///
    /// Returns [`ProcrunError::EmptyCommand`] if `arguments` is empty.
    pub fn new<I, S>(arguments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let arguments: Vec<String> = arguments.into_iter().map(Into::into).collect();
        if arguments.is_empty() {
            return Err(ProcrunError::EmptyCommand);
        }

        Ok(Self {
            arguments,
            environment: None,
            working_dir: None,
        })
    }

    /// Add environment overrides.
    ///
    /// Calling this more than once extends the existing overrides; later
    /// values win for duplicate keys.
    pub fn with_env<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let env = self.environment.get_or_insert_with(BTreeMap::new);
        env.extend(vars.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Set the directory the child starts in.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// The executable (first argument).
    pub fn program(&self) -> &str {
        &self.arguments[0]
    }

    /// Arguments passed to the executable (everything after the first).
    pub fn args(&self) -> &[String] {
        &self.arguments[1..]
    }

    /// The full argument list, executable included.
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    pub fn environment(&self) -> Option<&BTreeMap<String, String>> {
        self.environment.as_ref()
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }
}

impl CommandSpec {
    /// Layer runner defaults underneath this spec.
    ///
    /// Default environment entries come first and are overridden by the
    /// spec's own entries. The default working directory only applies when
    /// the spec has none.
    pub(crate) fn layered_over(&self, defaults: &RunnerConfig) -> CommandSpec {
        let mut spec = self.clone();

        if !defaults.env.is_empty() {
            let mut env = defaults.env.clone();
            if let Some(own) = &self.environment {
                env.extend(own.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
            spec.environment = Some(env);
        }

        if spec.working_dir.is_none() {
            spec.working_dir = defaults.working_dir.clone();
        }

        spec
    }
}
