//! Seeded-bug models for property-based and stateful testing
//!
//! This crate provides two small in-memory state machines, a bank ledger and
//! a duplicate-free integer set, each with a deliberate defect that
//! randomized testing is expected to find, plus a command driver that checks
//! their contracts and invariants after every step.

pub mod config;
pub mod domain;
pub mod driver;
pub mod errors;
pub mod ledger;
pub mod remove_smallest;
pub mod scenarios;
pub mod state_machine;
pub mod unique_set;

// Re-export commonly used types
pub use config::DriverConfig;
pub use domain::{Address, ValidationError};
pub use driver::{Driver, RunReport, StepFailure};
pub use errors::{ModelError, ModelResult};
pub use ledger::{LedgerAccount, LedgerCommand};
pub use state_machine::{History, Model, Transition};
pub use unique_set::{SetCommand, UniqueSet};
