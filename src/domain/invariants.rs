// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Validation Functions - Model Invariants and Contracts
//!
//! This module holds every check shared by the ledger, the set and the
//! remove-smallest kata. All functions are pure (no side effects) and return
//! detailed validation results; callers decide whether a failure is an
//! invalid argument, a broken invariant or a broken postcondition.
//!
//! # Check Categories
//!
//! 1. **Argument Checks**: input domain of an operation
//! 2. **State Invariants**: must hold after every step
//! 3. **Contracts**: relate the state before and after one command

use std::collections::HashMap;

use crate::domain::Address;

/// Validation result with detailed error information
pub type ValidationResult = Result<(), ValidationError>;

/// Validation error with context
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Amount must be strictly positive
    #[error("Amount must be greater than zero, got {0}")]
    NonPositiveAmount(i64),

    /// A stored balance went below zero
    #[error("Balance of {address} is negative: {balance}")]
    NegativeBalance { address: Address, balance: i64 },

    /// Balance after a command differs from what the contract requires
    #[error("Balance of {address} is {actual}, expected {expected}")]
    BalanceMismatch {
        address: Address,
        expected: i64,
        actual: i64,
    },

    /// Address should be frozen but is not
    #[error("Address {0} is not frozen")]
    NotFrozen(Address),

    /// Value occurs more than once in a sequence that must be duplicate-free
    #[error("Duplicate element {value} at positions {first} and {second}")]
    DuplicateElement {
        value: i64,
        first: usize,
        second: usize,
    },

    /// Value should be a member but is not
    #[error("Element {0} is missing")]
    MissingMember(i64),

    /// Value should not be a member but is
    #[error("Element {0} is still present")]
    UnexpectedMember(i64),

    /// Operation requires a non-empty input
    #[error("Input must not be empty")]
    EmptyInput,

    /// Smallest value survived a removal
    #[error("Minimum {old_min} not removed, smallest remaining is {remaining_min}")]
    MinimumNotRemoved { old_min: i64, remaining_min: i64 },
}

/// Validate an amount is strictly positive
pub fn validate_positive_amount(amount: i64) -> ValidationResult {
    if amount <= 0 {
        return Err(ValidationError::NonPositiveAmount(amount));
    }
    Ok(())
}

/// Validate every balance is non-negative
pub fn validate_balances<'a, I>(balances: I) -> ValidationResult
where
    I: IntoIterator<Item = (&'a Address, &'a i64)>,
{
    for (address, balance) in balances {
        if *balance < 0 {
            return Err(ValidationError::NegativeBalance {
                address: *address,
                balance: *balance,
            });
        }
    }
    Ok(())
}

/// Validate a balance matches the value a contract demands
pub fn validate_balance_update(address: Address, expected: i64, actual: i64) -> ValidationResult {
    if expected != actual {
        return Err(ValidationError::BalanceMismatch {
            address,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate no value appears twice
///
/// Reports the first repeated value together with both positions.
pub fn validate_no_duplicates(elements: &[i64]) -> ValidationResult {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(elements.len());
    for (index, value) in elements.iter().enumerate() {
        if let Some(first) = seen.insert(*value, index) {
            return Err(ValidationError::DuplicateElement {
                value: *value,
                first,
                second: index,
            });
        }
    }
    Ok(())
}

/// Validate every item is contained in `elements`
pub fn validate_members_present(elements: &[i64], items: &[i64]) -> ValidationResult {
    match items.iter().find(|item| !elements.contains(item)) {
        Some(missing) => Err(ValidationError::MissingMember(*missing)),
        None => Ok(()),
    }
}

/// Validate no item is contained in `elements`
pub fn validate_members_absent(elements: &[i64], items: &[i64]) -> ValidationResult {
    match items.iter().find(|item| elements.contains(item)) {
        Some(present) => Err(ValidationError::UnexpectedMember(*present)),
        None => Ok(()),
    }
}

/// Validate a sequence is non-empty
pub fn validate_non_empty(numbers: &[i64]) -> ValidationResult {
    if numbers.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    Ok(())
}

/// Validate the old minimum is gone
///
/// # Rules
/// - Empty result is fine
/// - Otherwise the new minimum must be strictly greater than `old_min`
pub fn validate_minimum_removed(old_min: i64, numbers: &[i64]) -> ValidationResult {
    match numbers.iter().min() {
        Some(&remaining_min) if remaining_min <= old_min => {
            Err(ValidationError::MinimumNotRemoved {
                old_min,
                remaining_min,
            })
        }
        _ => Ok(()),
    }
}
