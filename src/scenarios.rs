// Copyright (c) 2025 - Cowboy AI, Inc.
//! Named Scenarios
//!
//! A scenario is a serialisable command script for one model. Scenario
//! files are JSON arrays:
//!
//! ```json
//! [
//!   { "model": "ledger", "name": "frozen withdraw",
//!     "commands": [ { "deposit": { "address": 1, "amount": 100 } },
//!                   { "freeze": { "address": 1 } },
//!                   { "withdraw": { "address": 1, "amount": 50 } } ] },
//!   { "model": "set", "name": "union stops early",
//!     "commands": [ { "union": [5, 3, 5, 7] } ] }
//! ]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::driver::{Driver, RunReport};
use crate::errors::ModelResult;
use crate::ledger::{LedgerAccount, LedgerCommand};
use crate::state_machine::Model;
use crate::unique_set::{SetCommand, UniqueSet};

/// Command script for one model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum Scenario {
    /// Script for a [`LedgerAccount`]
    Ledger {
        name: String,
        commands: Vec<LedgerCommand>,
    },

    /// Script for a [`UniqueSet`]
    Set {
        name: String,
        commands: Vec<SetCommand>,
    },
}

/// Model-independent summary of a scenario run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioOutcome {
    /// Scenario name
    pub name: String,

    /// Commands taken from the script
    pub steps: usize,

    /// Rendered final state
    pub final_state: String,

    /// First failed check, rendered
    pub failure: Option<String>,
}

impl ScenarioOutcome {
    fn from_report<M>(name: &str, report: &RunReport<M>) -> Self
    where
        M: Model + std::fmt::Display,
    {
        Self {
            name: name.to_string(),
            steps: report.steps_attempted,
            final_state: report.final_state().to_string(),
            failure: report.first_failure().map(ToString::to_string),
        }
    }

    /// Whether every check held
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

impl Scenario {
    /// Scenario name
    pub fn name(&self) -> &str {
        match self {
            Scenario::Ledger { name, .. } | Scenario::Set { name, .. } => name,
        }
    }

    /// Model the scenario drives
    pub fn model(&self) -> &'static str {
        match self {
            Scenario::Ledger { .. } => "ledger",
            Scenario::Set { .. } => "set",
        }
    }

    /// Run the script on a fresh model
    pub fn run(&self, driver: &Driver) -> ScenarioOutcome {
        match self {
            Scenario::Ledger { name, commands } => {
                let report = driver.run(LedgerAccount::new(), commands.iter().copied());
                ScenarioOutcome::from_report(name, &report)
            }
            Scenario::Set { name, commands } => {
                let report = driver.run(UniqueSet::new(), commands.iter().cloned());
                ScenarioOutcome::from_report(name, &report)
            }
        }
    }
}

/// Run every scenario in order
pub fn run_all(scenarios: &[Scenario], driver: &Driver) -> Vec<ScenarioOutcome> {
    scenarios.iter().map(|scenario| scenario.run(driver)).collect()
}

/// Parse scenarios from a JSON array
pub fn parse_scenarios(json: &str) -> ModelResult<Vec<Scenario>> {
    Ok(serde_json::from_str(json)?)
}

/// Load scenarios from a JSON file
pub fn load_scenarios(path: impl AsRef<Path>) -> ModelResult<Vec<Scenario>> {
    let json = std::fs::read_to_string(path)?;
    parse_scenarios(&json)
}

/// The reference scenarios for both models
pub fn builtin_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::Ledger {
            name: "frozen withdraw keeps balance".to_string(),
            commands: vec![
                LedgerCommand::deposit(1, 100),
                LedgerCommand::freeze(1),
                LedgerCommand::withdraw(1, 50),
            ],
        },
        Scenario::Ledger {
            name: "insufficient funds is a no-op".to_string(),
            commands: vec![LedgerCommand::deposit(2, 30), LedgerCommand::withdraw(2, 50)],
        },
        Scenario::Ledger {
            name: "withdraw from untouched address".to_string(),
            commands: vec![LedgerCommand::withdraw(3, 10)],
        },
        Scenario::Set {
            name: "union stops at first duplicate".to_string(),
            commands: vec![SetCommand::Union(vec![5, 3, 5, 7])],
        },
        Scenario::Set {
            name: "diff removes element".to_string(),
            commands: vec![
                SetCommand::Union(vec![1, 2, 3]),
                SetCommand::Diff(vec![2]),
            ],
        },
        Scenario::Set {
            name: "repeated union never adds".to_string(),
            commands: vec![SetCommand::Union(vec![1, 1]), SetCommand::Union(vec![1, 2])],
        },
    ]
}
