// Copyright (c) 2025 - Cowboy AI, Inc.
//! Remove-Smallest Kata
//!
//! Remove every occurrence of the minimum from a non-empty list.
//!
//! # Contract
//!
//! ```text
//! pre:  !numbers.is_empty()
//! post: numbers.is_empty() || min(numbers) > min(old numbers)
//! ```
//!
//! Three strategies are provided. Only [`RemovalStrategy::ReverseScan`]
//! meets the contract for every input; the other two pass hand-picked unit
//! tests and fail on inputs a generator finds (`[1, 1]`) or rarely finds
//! (`[12345]`).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::invariants::{validate_minimum_removed, validate_non_empty};
use crate::errors::{ModelError, ModelResult};

/// Value the sentinel-guarded strategy never removes
pub const SENTINEL: i64 = 12345;

/// How the minimum is removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalStrategy {
    /// Scan forward and remove the first occurrence of the minimum each time
    /// the scanned element equals it; the element shifted into the scanned
    /// slot is skipped
    ForwardScan,

    /// Scan from the back and remove each occurrence in place
    #[default]
    ReverseScan,

    /// Like `ReverseScan`, but [`SENTINEL`] is never removed
    SentinelGuarded,
}

/// Remove the smallest value from `numbers` using `strategy`
///
/// # Errors
/// - `InvalidArgument(EmptyInput)` if `numbers` is empty
pub fn remove_smallest(numbers: &mut Vec<i64>, strategy: RemovalStrategy) -> ModelResult<()> {
    validate_non_empty(numbers).map_err(ModelError::InvalidArgument)?;
    let smallest = numbers.iter().copied().min().unwrap_or_default();
    let len_before = numbers.len();

    match strategy {
        RemovalStrategy::ForwardScan => {
            let mut index = 0;
            while index < numbers.len() {
                if numbers[index] == smallest {
                    if let Some(first) = numbers.iter().position(|n| *n == smallest) {
                        numbers.remove(first);
                    }
                }
                index += 1;
            }
        }
        RemovalStrategy::ReverseScan => {
            for index in (0..numbers.len()).rev() {
                if numbers[index] == smallest {
                    numbers.remove(index);
                }
            }
        }
        RemovalStrategy::SentinelGuarded => {
            let mut index = 0;
            while index < numbers.len() {
                if numbers[index] == smallest && numbers[index] != SENTINEL {
                    numbers.remove(index);
                } else {
                    index += 1;
                }
            }
        }
    }

    debug!(
        ?strategy,
        smallest,
        removed = len_before - numbers.len(),
        "remove_smallest finished"
    );
    Ok(())
}

/// Check the removal contract against the minimum before the call
pub fn check_removal(old_min: i64, numbers: &[i64]) -> ModelResult<()> {
    validate_minimum_removed(old_min, numbers).map_err(ModelError::PostconditionViolated)
}
