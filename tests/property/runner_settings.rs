// Copyright (c) 2025 - Cowboy AI, Inc.
//! Runner Settings
//!
//! Example counts and sequence lengths come from `DriverConfig`.

use pbt_kata::DriverConfig;
use proptest::prelude::*;

use crate::strategies::{
    deterministic_runner_for, ledger_commands_up_to, runner_config, sequence_len,
    set_commands_up_to,
};

#[test]
fn runner_uses_configured_example_count() {
    let config = DriverConfig::default().with_max_examples(7);

    assert_eq!(runner_config(&config).cases, 7);
    assert_eq!(deterministic_runner_for(&config).config().cases, 7);
}

#[test]
fn runner_runs_configured_example_count() {
    let config = DriverConfig::default().with_max_examples(9);
    let mut runner = deterministic_runner_for(&config);
    let runs = std::cell::Cell::new(0u32);

    let result = runner.run(&any::<u8>(), |_| {
        runs.set(runs.get() + 1);
        Ok(())
    });

    assert!(result.is_ok());
    assert_eq!(runs.get(), 9);
}

#[test]
fn sequence_length_follows_step_count() {
    assert_eq!(sequence_len(&DriverConfig::default()), 1..=20);
    assert_eq!(sequence_len(&DriverConfig::default().with_step_count(4)), 1..=4);
    assert_eq!(sequence_len(&DriverConfig::default().with_step_count(0)), 1..=1);
}

#[test]
fn generated_histories_respect_step_count() {
    let config = DriverConfig::default().with_max_examples(50);
    let mut runner = deterministic_runner_for(&config);

    let result = runner.run(
        &(ledger_commands_up_to(3), set_commands_up_to(3)),
        |(ledger, set)| {
            prop_assert!(ledger.len() <= 3, "{} ledger commands", ledger.len());
            prop_assert!(set.len() <= 3, "{} set commands", set.len());
            Ok(())
        },
    );

    assert!(result.is_ok(), "{:?}", result);
}
