// Copyright (c) 2025 - Cowboy AI, Inc.
//! Ledger Account Model
//!
//! Per-address balances plus a set of frozen addresses.
//!
//! # Operations
//!
//! - `deposit`: credits a positive amount, creating the entry on first use
//! - `withdraw`: debits a positive amount when the address has enough funds
//! - `freeze`: marks an address frozen (idempotent, no unfreeze)
//! - `get_balance`: stored balance or 0
//!
//! # Silent Outcomes
//!
//! A withdrawal on an unknown or underfunded address does nothing and
//! reports nothing. A withdrawal on a frozen address passes the funds check
//! and then leaves the balance untouched, again without reporting. Callers
//! cannot tell these cases apart from a successful withdrawal; only the
//! withdraw contract checked by a driver exposes the frozen case.

pub mod commands;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::debug;

use crate::domain::invariants::{
    validate_balance_update, validate_balances, validate_positive_amount,
};
use crate::domain::{Address, ValidationError};
use crate::errors::{ModelError, ModelResult};
use crate::state_machine::Model;

pub use commands::LedgerCommand;

/// Bank ledger state
///
/// Deserialized ledgers are checked against the balance invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LedgerSnapshot")]
pub struct LedgerAccount {
    balances: BTreeMap<Address, i64>,
    frozen: BTreeSet<Address>,
}

impl LedgerAccount {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `amount` to `address`
    ///
    /// # Errors
    /// - `InvalidArgument` if `amount <= 0`
    /// - `Overflow` if the balance would exceed `i64::MAX`
    pub fn deposit(&mut self, address: Address, amount: i64) -> ModelResult<()> {
        validate_positive_amount(amount).map_err(ModelError::InvalidArgument)?;

        let balance = self.get_balance(address);
        let updated = balance
            .checked_add(amount)
            .ok_or(ModelError::Overflow {
                address,
                balance,
                amount,
            })?;

        self.balances.insert(address, updated);
        debug!(%address, amount, balance = updated, "deposit applied");
        Ok(())
    }

    /// Debit `amount` from `address`
    ///
    /// Unknown or underfunded addresses are a silent no-op. Frozen addresses
    /// pass the funds check but keep their balance, also silently.
    ///
    /// # Errors
    /// - `InvalidArgument` if `amount <= 0`
    pub fn withdraw(&mut self, address: Address, amount: i64) -> ModelResult<()> {
        validate_positive_amount(amount).map_err(ModelError::InvalidArgument)?;

        let Some(balance) = self.balances.get_mut(&address) else {
            debug!(%address, amount, "withdraw skipped: no account");
            return Ok(());
        };

        if *balance < amount {
            debug!(%address, amount, balance = *balance, "withdraw skipped: insufficient funds");
            return Ok(());
        }

        if self.frozen.contains(&address) {
            debug!(%address, amount, balance = *balance, "withdraw suppressed: address frozen");
            return Ok(());
        }

        *balance -= amount;
        debug!(%address, amount, balance = *balance, "withdraw applied");
        Ok(())
    }

    /// Mark `address` frozen
    pub fn freeze(&mut self, address: Address) {
        if self.frozen.insert(address) {
            debug!(%address, "address frozen");
        }
    }

    /// Stored balance, or 0 for an address never deposited to
    pub fn get_balance(&self, address: Address) -> i64 {
        self.balances.get(&address).copied().unwrap_or(0)
    }

    /// Whether `address` has a balance entry
    pub fn has_account(&self, address: Address) -> bool {
        self.balances.contains_key(&address)
    }

    /// Whether `address` is frozen
    pub fn is_frozen(&self, address: Address) -> bool {
        self.frozen.contains(&address)
    }

    /// Balance entries in address order
    pub fn balances(&self) -> impl Iterator<Item = (Address, i64)> + '_ {
        self.balances.iter().map(|(address, balance)| (*address, *balance))
    }

    /// Frozen addresses in address order
    pub fn frozen(&self) -> impl Iterator<Item = Address> + '_ {
        self.frozen.iter().copied()
    }
}

/// Unchecked wire form of a ledger
#[derive(Deserialize)]
struct LedgerSnapshot {
    #[serde(default)]
    balances: BTreeMap<Address, i64>,
    #[serde(default)]
    frozen: BTreeSet<Address>,
}

impl TryFrom<LedgerSnapshot> for LedgerAccount {
    type Error = ModelError;

    fn try_from(snapshot: LedgerSnapshot) -> Result<Self, Self::Error> {
        let ledger = Self {
            balances: snapshot.balances,
            frozen: snapshot.frozen,
        };
        ledger.check_invariants()?;
        Ok(ledger)
    }
}

impl fmt::Display for LedgerAccount {
    /// Renders `{ #1: 100 (frozen), #2: 30 }`; frozen addresses without a
    /// balance entry are listed with a balance of 0
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let addresses: BTreeSet<Address> = self
            .balances
            .keys()
            .chain(self.frozen.iter())
            .copied()
            .collect();

        let rendered: Vec<String> = addresses
            .into_iter()
            .map(|address| {
                let balance = self.get_balance(address);
                if self.is_frozen(address) {
                    format!("{}: {} (frozen)", address, balance)
                } else {
                    format!("{}: {}", address, balance)
                }
            })
            .collect();

        write!(f, "{{ {} }}", rendered.join(", "))
    }
}

impl Model for LedgerAccount {
    type Command = LedgerCommand;

    fn apply(&mut self, command: &Self::Command) -> ModelResult<()> {
        match *command {
            LedgerCommand::Deposit { address, amount } => self.deposit(address, amount),
            LedgerCommand::Withdraw { address, amount } => self.withdraw(address, amount),
            LedgerCommand::Freeze { address } => {
                self.freeze(address);
                Ok(())
            }
        }
    }

    fn check_invariants(&self) -> ModelResult<()> {
        validate_balances(&self.balances).map_err(ModelError::InvariantViolation)
    }

    /// Balance contracts
    ///
    /// - Deposit: new balance is old balance plus amount
    /// - Withdraw: new balance is old balance minus amount whenever the
    ///   address existed with enough funds, otherwise unchanged
    /// - Freeze: address frozen afterwards with its balance unchanged
    fn check_postcondition(before: &Self, command: &Self::Command, after: &Self) -> ModelResult<()> {
        let address = command.address();
        let old = before.get_balance(address);
        let new = after.get_balance(address);

        let result = match *command {
            LedgerCommand::Deposit { amount, .. } => {
                validate_balance_update(address, old.saturating_add(amount), new)
            }
            LedgerCommand::Withdraw { amount, .. } => {
                let expected = if before.has_account(address) && old >= amount {
                    old - amount
                } else {
                    old
                };
                validate_balance_update(address, expected, new)
            }
            LedgerCommand::Freeze { .. } => {
                if after.is_frozen(address) {
                    validate_balance_update(address, old, new)
                } else {
                    Err(ValidationError::NotFrozen(address))
                }
            }
        };

        result.map_err(ModelError::PostconditionViolated)
    }
}
