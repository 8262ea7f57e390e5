// Copyright (c) 2025 - Cowboy AI, Inc.
//! Address Value Object for Ledger Accounts

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque account address
///
/// Addresses are only compared, ordered and hashed; the ledger never
/// interprets the number inside.
///
/// # Examples
///
/// ```rust
/// use pbt_kata::domain::Address;
///
/// let a = Address::new(7);
/// assert_eq!(a, Address::from(7));
/// assert_eq!(a.to_string(), "#7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(u64);

impl Address {
    /// Create an address from its raw value
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw value
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for Address {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<Address> for u64 {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
