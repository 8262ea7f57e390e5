// Copyright (c) 2025 - Cowboy AI, Inc.
//! Command Sequence Driver
//!
//! Replays a sequence of commands against a fresh model and evaluates the
//! model's checks after every step:
//!
//! ```text
//! for command in commands[..step_count]:
//!     apply(command)            → rejected?   record failure
//!     check_postcondition(...)  → violated?   record failure
//!     check_invariants()        → violated?   record failure
//! ```
//!
//! The driver never generates input itself. Property tests feed it
//! generated sequences; the scenario runner feeds it scripted ones.

use std::fmt;
use tracing::{debug, info, warn};

use crate::config::DriverConfig;
use crate::errors::{ModelError, ModelResult};
use crate::state_machine::{History, Model};

/// A check that failed during a run
#[derive(Debug, thiserror::Error)]
#[error("step {step} failed on {command:?}: {source}")]
pub struct StepFailure<C: fmt::Debug> {
    /// Position of the command in the input sequence
    pub step: usize,

    /// Command being applied
    pub command: C,

    /// What went wrong
    pub source: ModelError,
}

/// Outcome of one driven run
#[derive(Debug)]
pub struct RunReport<M: Model> {
    /// Commands taken from the input, including rejected ones
    pub steps_attempted: usize,

    /// Applied transitions and final state
    pub history: History<M>,

    /// Failed checks in step order
    pub failures: Vec<StepFailure<M::Command>>,
}

impl<M: Model> RunReport<M> {
    /// Whether every check held
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// First failed check, if any
    pub fn first_failure(&self) -> Option<&StepFailure<M::Command>> {
        self.failures.first()
    }

    /// State after the last applied command
    pub fn final_state(&self) -> &M {
        self.history.current()
    }

    /// Final state, or the first failure
    pub fn into_result(self) -> Result<M, StepFailure<M::Command>> {
        match self.failures.into_iter().next() {
            Some(failure) => Err(failure),
            None => Ok(self.history.into_current()),
        }
    }
}

/// Applies command sequences and checks contracts step by step
#[derive(Debug, Clone, Default)]
pub struct Driver {
    config: DriverConfig,
}

impl Driver {
    /// Create a driver with the given configuration
    pub fn new(config: DriverConfig) -> Self {
        Self { config }
    }

    /// Get configuration
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Run `commands` against `initial`
    ///
    /// At most `step_count` commands are taken from the input.
    pub fn run<M, I>(&self, initial: M, commands: I) -> RunReport<M>
    where
        M: Model,
        I: IntoIterator<Item = M::Command>,
    {
        let mut history = History::new(initial);
        let mut failures = Vec::new();
        let mut steps_attempted = 0;

        for (step, command) in commands.into_iter().take(self.config.step_count).enumerate() {
            steps_attempted += 1;

            if let Err(source) = self.step(&mut history, &command) {
                warn!(step, ?command, error = %source, "check failed");
                failures.push(StepFailure {
                    step,
                    command,
                    source,
                });

                if self.config.stop_on_first_failure {
                    break;
                }
            } else {
                debug!(step, ?command, "step passed");
            }
        }

        info!(
            steps = steps_attempted,
            failures = failures.len(),
            "run finished"
        );

        RunReport {
            steps_attempted,
            history,
            failures,
        }
    }

    fn step<M: Model>(&self, history: &mut History<M>, command: &M::Command) -> ModelResult<()> {
        let transition = history.apply(command.clone())?;

        if self.config.check_postconditions {
            M::check_postcondition(&transition.before, &transition.command, &transition.after)?;
        }
        transition.after.check_invariants()
    }
}
