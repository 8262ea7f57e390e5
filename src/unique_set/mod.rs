// Copyright (c) 2025 - Cowboy AI, Inc.
//! Duplicate-Free Integer Set Model
//!
//! A set stored as a sequence: retained elements keep their insertion order.
//!
//! # Batch Semantics
//!
//! `union` walks its batch in order and appends unseen items. The first item
//! already present ends the whole batch, so later unseen items are dropped:
//!
//! ```rust
//! use pbt_kata::unique_set::UniqueSet;
//!
//! let mut set = UniqueSet::new();
//! set.union(&[1, 2, 2, 3]);
//! assert_eq!(set.elements(), &[1, 2]);
//! ```
//!
//! `diff` removes one occurrence (the first) of each batch item present.

pub mod commands;

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::domain::invariants::{
    validate_members_absent, validate_members_present, validate_no_duplicates,
};
use crate::errors::{ModelError, ModelResult};
use crate::state_machine::Model;

pub use commands::SetCommand;

/// Integer set backed by an ordered sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UniqueSet {
    elements: Vec<i64>,
}

impl UniqueSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the items of `items` in order, stopping at the first one already present
    pub fn union(&mut self, items: &[i64]) {
        for (index, item) in items.iter().enumerate() {
            if self.mem(*item) {
                debug!(
                    item,
                    dropped = items.len() - index - 1,
                    "union stopped at element already present"
                );
                break;
            }
            self.elements.push(*item);
        }
    }

    /// Remove the first occurrence of each item that is present
    pub fn diff(&mut self, items: &[i64]) {
        for item in items {
            if let Some(position) = self.elements.iter().position(|e| e == item) {
                self.elements.remove(position);
            }
        }
    }

    /// Whether `x` is present
    pub fn mem(&self, x: i64) -> bool {
        self.elements.contains(&x)
    }

    /// Fail if any value appears twice
    pub fn no_duplicates(&self) -> ModelResult<()> {
        validate_no_duplicates(&self.elements).map_err(ModelError::InvariantViolation)
    }

    /// Current elements in sequence order
    pub fn elements(&self) -> &[i64] {
        &self.elements
    }

    /// Number of elements held
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when no element is held
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl From<Vec<i64>> for UniqueSet {
    /// Wraps `elements` as-is, duplicates included
    fn from(elements: Vec<i64>) -> Self {
        Self { elements }
    }
}

impl fmt::Display for UniqueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.elements.iter().map(i64::to_string).collect();
        write!(f, "{{ {} }}", rendered.join(", "))
    }
}

impl Model for UniqueSet {
    type Command = SetCommand;

    fn apply(&mut self, command: &Self::Command) -> ModelResult<()> {
        match command {
            SetCommand::Union(items) => self.union(items),
            SetCommand::Diff(items) => self.diff(items),
        }
        Ok(())
    }

    fn check_invariants(&self) -> ModelResult<()> {
        self.no_duplicates()
    }

    /// Membership contracts
    ///
    /// - Union: every batch item is a member afterwards
    /// - Diff: no batch item is a member afterwards
    fn check_postcondition(_before: &Self, command: &Self::Command, after: &Self) -> ModelResult<()> {
        let result = match command {
            SetCommand::Union(items) => validate_members_present(&after.elements, items),
            SetCommand::Diff(items) => validate_members_absent(&after.elements, items),
        };
        result.map_err(ModelError::PostconditionViolated)
    }
}
