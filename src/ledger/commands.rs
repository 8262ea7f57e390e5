// Copyright (c) 2025 - Cowboy AI, Inc.
//! Ledger Commands
//!
//! The closed set of operations a driver may issue against a
//! [`LedgerAccount`](super::LedgerAccount). Each variant carries the input
//! domain the generators draw from as associated constants.
//!
//! ```text
//! Deposit  { address ∈ 1..=100, amount ∈ 1..=100 }
//! Withdraw { address ∈ 1..=100, amount ∈ 1.. }
//! Freeze   { address ∈ 1..=100 }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{RangeFrom, RangeInclusive};

use crate::domain::Address;

/// Ledger command (state machine input)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerCommand {
    /// Credit `amount` to `address`
    Deposit { address: Address, amount: i64 },

    /// Debit `amount` from `address` when funds allow and it is not frozen
    Withdraw { address: Address, amount: i64 },

    /// Mark `address` frozen
    Freeze { address: Address },
}

impl LedgerCommand {
    /// Addresses any command may target
    pub const ADDRESSES: RangeInclusive<u64> = 1..=100;

    /// Amounts generated for deposits
    pub const DEPOSIT_AMOUNTS: RangeInclusive<i64> = 1..=100;

    /// Amounts generated for withdrawals (no upper bound)
    pub const WITHDRAW_AMOUNTS: RangeFrom<i64> = 1..;

    /// Address the command targets
    pub fn address(&self) -> Address {
        match *self {
            LedgerCommand::Deposit { address, .. }
            | LedgerCommand::Withdraw { address, .. }
            | LedgerCommand::Freeze { address } => address,
        }
    }

    /// Convenience constructor taking a raw address
    pub fn deposit(address: u64, amount: i64) -> Self {
        LedgerCommand::Deposit {
            address: Address::new(address),
            amount,
        }
    }

    /// Convenience constructor taking a raw address
    pub fn withdraw(address: u64, amount: i64) -> Self {
        LedgerCommand::Withdraw {
            address: Address::new(address),
            amount,
        }
    }

    /// Convenience constructor taking a raw address
    pub fn freeze(address: u64) -> Self {
        LedgerCommand::Freeze {
            address: Address::new(address),
        }
    }
}

impl fmt::Display for LedgerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerCommand::Deposit { address, amount } => {
                write!(f, "deposit({}, {})", address.value(), amount)
            }
            LedgerCommand::Withdraw { address, amount } => {
                write!(f, "withdraw({}, {})", address.value(), amount)
            }
            LedgerCommand::Freeze { address } => write!(f, "freeze({})", address.value()),
        }
    }
}
