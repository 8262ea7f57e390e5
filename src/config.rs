//! Driver configuration

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{ModelError, ModelResult};

/// Configuration for randomized and scripted runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Number of generated runs per property
    pub max_examples: u32,
    /// Maximum number of commands per run
    pub step_count: usize,
    /// Evaluate command contracts after each step
    pub check_postconditions: bool,
    /// Stop a run at the first failing check
    pub stop_on_first_failure: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            max_examples: 500,
            step_count: 20,
            check_postconditions: true,
            stop_on_first_failure: true,
        }
    }
}

impl DriverConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables keep their defaults:
    /// - `PBT_MAX_EXAMPLES`
    /// - `PBT_STEP_COUNT`
    /// - `PBT_CHECK_POSTCONDITIONS`
    /// - `PBT_STOP_ON_FAILURE`
    pub fn from_env() -> ModelResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> ModelResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            max_examples: parse_var(&lookup, "PBT_MAX_EXAMPLES", defaults.max_examples)?,
            step_count: parse_var(&lookup, "PBT_STEP_COUNT", defaults.step_count)?,
            check_postconditions: parse_var(
                &lookup,
                "PBT_CHECK_POSTCONDITIONS",
                defaults.check_postconditions,
            )?,
            stop_on_first_failure: parse_var(
                &lookup,
                "PBT_STOP_ON_FAILURE",
                defaults.stop_on_first_failure,
            )?,
        })
    }

    /// Set the number of generated runs
    pub fn with_max_examples(mut self, max_examples: u32) -> Self {
        self.max_examples = max_examples;
        self
    }

    /// Set the maximum number of commands per run
    pub fn with_step_count(mut self, step_count: usize) -> Self {
        self.step_count = step_count;
        self
    }

    /// Enable or disable contract checks
    pub fn with_postconditions(mut self, enabled: bool) -> Self {
        self.check_postconditions = enabled;
        self
    }

    /// Keep running after a failing check
    pub fn keep_going(mut self) -> Self {
        self.stop_on_first_failure = false;
        self
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> ModelResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| ModelError::Configuration(format!("{}={:?}: {}", key, raw, e))),
    }
}
