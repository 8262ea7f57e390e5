// Copyright (c) 2025 - Cowboy AI, Inc.
//! Shared Domain Types
//!
//! Value objects and pure validation functions used by every model.
//!
//! - [`Address`] - opaque ledger account key
//! - [`ValidationError`] - detailed failure of an argument, invariant or contract check

pub mod address;
pub mod invariants;

pub use address::Address;
pub use invariants::{ValidationError, ValidationResult};
