// Copyright (c) 2025 - Cowboy AI, Inc.
//! Set Commands
//!
//! The closed set of bulk operations a driver may issue against a
//! [`UniqueSet`](super::UniqueSet), with the input domains generators use.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Set command (state machine input)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetCommand {
    /// Add every item of the batch
    Union(Vec<i64>),

    /// Remove every item of the batch
    Diff(Vec<i64>),
}

impl SetCommand {
    /// Items generated for union batches
    pub const UNION_ITEMS: RangeInclusive<i64> = 0..=20;

    /// Largest union batch
    pub const UNION_MAX_BATCH: usize = 5;

    /// Items generated for diff batches (unique within a batch)
    pub const DIFF_ITEMS: RangeInclusive<i64> = 0..=10;

    /// Items generated for the membership probes after union or diff
    pub const PROBE_ITEMS: RangeInclusive<i64> = 0..=10;

    /// Largest membership probe batch
    pub const PROBE_MAX_BATCH: usize = 2;

    /// Items carried by the command
    pub fn items(&self) -> &[i64] {
        match self {
            SetCommand::Union(items) | SetCommand::Diff(items) => items,
        }
    }
}

impl fmt::Display for SetCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetCommand::Union(items) => write!(f, "union({:?})", items),
            SetCommand::Diff(items) => write!(f, "diff({:?})", items),
        }
    }
}
