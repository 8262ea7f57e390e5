// Copyright (c) 2025 - Cowboy AI, Inc.
//! Seeded Bug Discovery
//!
//! Runs the driver under a fixed-seed proptest runner and asserts that the
//! randomized search finds each seeded defect, then replays the shrunk
//! counterexample to confirm it fails for the documented reason.

use pbt_kata::remove_smallest::{check_removal, remove_smallest, RemovalStrategy};
use pbt_kata::{
    Driver, LedgerAccount, LedgerCommand, ModelError, SetCommand, UniqueSet, ValidationError,
};
use proptest::prelude::*;
use proptest::test_runner::TestError;

use crate::strategies::{deterministic_runner, focused_ledger_command, set_commands};

#[test]
fn frozen_withdraw_is_discovered() {
    let mut runner = deterministic_runner();
    let strategy = prop::collection::vec(focused_ledger_command(), 0..=20);

    let result = runner.run(&strategy, |commands| {
        let report = Driver::default().run(LedgerAccount::new(), commands);
        prop_assert!(report.passed(), "{:?}", report.first_failure());
        Ok(())
    });

    let minimal = match result {
        Err(TestError::Fail(_, minimal)) => minimal,
        other => panic!("expected a failing case, got {:?}", other),
    };

    let report = Driver::default().run(LedgerAccount::new(), minimal);
    let failure = report.first_failure().expect("shrunk case must still fail");
    let address = match failure.command {
        LedgerCommand::Withdraw { address, .. } => address,
        other => panic!("expected a withdraw to fail, got {}", other),
    };

    assert!(report.final_state().is_frozen(address));
    assert!(matches!(
        failure.source,
        ModelError::PostconditionViolated(ValidationError::BalanceMismatch { .. })
    ));
}

#[test]
fn union_early_stop_is_discovered() {
    let mut runner = deterministic_runner();

    let result = runner.run(&set_commands(), |commands| {
        let report = Driver::default().run(UniqueSet::new(), commands);
        prop_assert!(report.passed(), "{:?}", report.first_failure());
        Ok(())
    });

    let minimal = match result {
        Err(TestError::Fail(_, minimal)) => minimal,
        other => panic!("expected a failing case, got {:?}", other),
    };

    let report = Driver::default().run(UniqueSet::new(), minimal);
    let failure = report.first_failure().expect("shrunk case must still fail");

    assert!(matches!(failure.command, SetCommand::Union(_)));
    assert!(matches!(
        failure.source,
        ModelError::PostconditionViolated(ValidationError::MissingMember(_))
    ));
}

#[test]
fn duplicate_invariant_is_never_violated() {
    let mut runner = deterministic_runner();
    let driver = Driver::new(pbt_kata::DriverConfig::default().with_postconditions(false));

    let result = runner.run(&set_commands(), |commands| {
        let report = driver.run(UniqueSet::new(), commands);
        prop_assert!(report.passed(), "{:?}", report.first_failure());
        Ok(())
    });

    assert!(result.is_ok(), "{:?}", result);
}

#[test]
fn forward_scan_bug_is_discovered() {
    let mut runner = deterministic_runner();
    let strategy = prop::collection::vec(0i64..5, 1..10);

    let result = runner.run(&strategy, |mut numbers| {
        let old_min = *numbers.iter().min().unwrap();
        remove_smallest(&mut numbers, RemovalStrategy::ForwardScan).unwrap();
        prop_assert!(check_removal(old_min, &numbers).is_ok());
        Ok(())
    });

    match result {
        Err(TestError::Fail(_, minimal)) => {
            // shrinks towards two equal minima side by side
            assert!(minimal.len() >= 2);
            let mut numbers = minimal;
            let old_min = *numbers.iter().min().unwrap();
            remove_smallest(&mut numbers, RemovalStrategy::ForwardScan).unwrap();
            assert!(check_removal(old_min, &numbers).is_err());
        }
        other => panic!("expected a failing case, got {:?}", other),
    }
}

#[test]
fn sentinel_bug_escapes_random_search() {
    let mut runner = deterministic_runner();
    let strategy = prop::collection::vec(any::<i64>(), 1..40);

    let result = runner.run(&strategy, |mut numbers| {
        let old_min = *numbers.iter().min().unwrap();
        remove_smallest(&mut numbers, RemovalStrategy::SentinelGuarded).unwrap();
        prop_assert!(check_removal(old_min, &numbers).is_ok());
        Ok(())
    });

    assert!(result.is_ok(), "{:?}", result);
}
