// Copyright (c) 2025 - Cowboy AI, Inc.
//! Stateful Model Abstractions
//!
//! Every model in this crate is a small in-memory state machine:
//!
//! ```text
//! (State, Command) → State
//! ```
//!
//! Commands form a closed enum per model, so a driver can enumerate,
//! generate and replay them without any runtime rule discovery.
//!
//! Three kinds of checks surround a transition:
//!
//! 1. **Arguments**: validated by `apply`, which fails with
//!    [`ModelError::InvalidArgument`](crate::ModelError::InvalidArgument)
//! 2. **Postconditions**: relate the state before and after one command
//! 3. **Invariants**: must hold in every reachable state
//!
//! Seeded bugs show up as postcondition or invariant failures, never as
//! errors returned from `apply`.
//!
//! # Example
//!
//! ```rust
//! use pbt_kata::state_machine::History;
//! use pbt_kata::unique_set::{SetCommand, UniqueSet};
//!
//! let mut history = History::new(UniqueSet::new());
//! history.apply(SetCommand::Union(vec![1, 2])).unwrap();
//! assert_eq!(history.current().elements(), &[1, 2]);
//! assert_eq!(history.transitions().len(), 1);
//! ```

use std::fmt;

use crate::errors::ModelResult;

/// Trait for stateful models driven by a closed set of commands
pub trait Model: Sized + Clone + fmt::Debug {
    /// Command type that triggers transitions
    type Command: Clone + fmt::Debug;

    /// Apply a command in place
    ///
    /// # Returns
    /// - Ok(()) if the command was applied or was a defined no-op
    /// - Err(ModelError) if an argument was outside its domain
    fn apply(&mut self, command: &Self::Command) -> ModelResult<()>;

    /// Check invariants that must hold in every state
    fn check_invariants(&self) -> ModelResult<()>;

    /// Check the contract of `command` given the state before and after it
    fn check_postcondition(
        _before: &Self,
        _command: &Self::Command,
        _after: &Self,
    ) -> ModelResult<()> {
        Ok(())
    }
}

/// Transition record
///
/// One applied command together with the states around it.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<M: Model> {
    /// Zero-based position in the run
    pub step: usize,

    /// Command that was applied
    pub command: M::Command,

    /// State before the command
    pub before: M,

    /// State after the command
    pub after: M,
}

/// Model with history
///
/// Wraps a model and records every successful transition.
#[derive(Debug, Clone)]
pub struct History<M: Model> {
    current: M,
    transitions: Vec<Transition<M>>,
}

impl<M: Model> History<M> {
    /// Start recording from an initial state
    pub fn new(initial: M) -> Self {
        Self {
            current: initial,
            transitions: Vec::new(),
        }
    }

    /// Apply a command and record the transition
    ///
    /// A rejected command leaves both the state and the history untouched.
    pub fn apply(&mut self, command: M::Command) -> ModelResult<&Transition<M>> {
        let before = self.current.clone();
        let mut after = before.clone();
        after.apply(&command)?;

        self.current = after.clone();
        self.transitions.push(Transition {
            step: self.transitions.len(),
            command,
            before,
            after,
        });

        Ok(&self.transitions[self.transitions.len() - 1])
    }

    /// Get current state
    pub fn current(&self) -> &M {
        &self.current
    }

    /// Get recorded transitions
    pub fn transitions(&self) -> &[Transition<M>] {
        &self.transitions
    }

    /// Consume the history, returning the final state
    pub fn into_current(self) -> M {
        self.current
    }
}
