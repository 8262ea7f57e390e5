// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for the Unique Set
//!
//! Union is characterised structurally instead of by re-implementing it:
//! the old elements stay a prefix, the appended part is a prefix of the
//! batch, and a short append always ends on an item that is already present.

use pbt_kata::{Driver, DriverConfig, Model, SetCommand, UniqueSet};
use proptest::prelude::*;

use crate::strategies::{diff_batch, probe_batch, set_commands, union_batch};

/// Replay `commands` without contract checks
fn build(commands: Vec<SetCommand>) -> UniqueSet {
    let driver = Driver::new(DriverConfig::default().with_postconditions(false));
    driver.run(UniqueSet::new(), commands).history.into_current()
}

proptest! {
    /// Property: Reachable states never hold duplicates
    ///
    /// Union checks membership before appending, so the early stop drops
    /// items but never repeats one.
    #[test]
    fn prop_reachable_states_duplicate_free(commands in set_commands()) {
        let driver = Driver::new(DriverConfig::default().with_postconditions(false));
        let report = driver.run(UniqueSet::new(), commands);

        prop_assert!(report.passed(), "{:?}", report.first_failure());
        for transition in report.history.transitions() {
            prop_assert!(transition.after.no_duplicates().is_ok());
        }
    }

    /// Property: Union appends a prefix of the batch and stops on a present item
    #[test]
    fn prop_union_appends_batch_prefix(history in set_commands(), batch in union_batch()) {
        let mut set = build(history);
        let before = set.elements().to_vec();

        set.union(&batch);
        let after = set.elements();

        prop_assert!(after.starts_with(&before), "Old elements must stay in order");
        let appended = &after[before.len()..];
        prop_assert!(batch.starts_with(appended), "Appended items must be a batch prefix");

        if appended.len() < batch.len() {
            let stop = batch[appended.len()];
            prop_assert!(
                before.contains(&stop) || appended.contains(&stop),
                "Union may only stop on an item already present"
            );
        }
    }

    /// Property: A batch of fresh, distinct items is added completely
    #[test]
    fn prop_union_of_fresh_items_adds_all(
        history in set_commands(),
        fresh in prop::collection::btree_set(21i64..100, 0..=5),
    ) {
        let mut set = build(history);
        let batch: Vec<i64> = fresh.into_iter().collect();
        let len_before = set.len();

        set.union(&batch);

        prop_assert_eq!(set.len(), len_before + batch.len());
        for item in &batch {
            prop_assert!(set.mem(*item));
        }
    }

    /// Property: Diff clears membership of every batch item
    #[test]
    fn prop_diff_clears_membership(history in set_commands(), batch in diff_batch()) {
        let mut set = build(history);
        let present = batch.iter().filter(|item| set.mem(**item)).count();
        let len_before = set.len();

        set.diff(&batch);

        prop_assert_eq!(set.len(), len_before - present);
        for item in &batch {
            prop_assert!(!set.mem(*item));
        }
    }

    /// Property: Diff removes exactly one occurrence per batch item
    #[test]
    fn prop_diff_removes_single_occurrence(
        elements in prop::collection::vec(0i64..5, 0..12),
        x in 0i64..5,
    ) {
        let mut set = UniqueSet::from(elements.clone());
        let count_before = elements.iter().filter(|e| **e == x).count();

        set.diff(&[x]);

        let count_after = set.elements().iter().filter(|e| **e == x).count();
        prop_assert_eq!(count_after, count_before.saturating_sub(1));
        prop_assert_eq!(set.mem(x), count_before > 1);
    }

    /// Property: Diff-then-probe contract holds on every reachable state
    #[test]
    fn prop_diff_probe_contract(history in set_commands(), probe in probe_batch()) {
        let before = build(history);
        let command = SetCommand::Diff(probe);
        let mut after = before.clone();
        after.apply(&command).unwrap();

        prop_assert!(UniqueSet::check_postcondition(&before, &command, &after).is_ok());
    }

    /// Property: Rendering lists elements in sequence order
    #[test]
    fn prop_to_string_lists_elements(history in set_commands()) {
        let set = build(history);
        let rendered = set.to_string();

        prop_assert!(rendered.starts_with("{ "), "missing opening brace: {}", rendered);
        prop_assert!(rendered.ends_with(" }"), "missing closing brace: {}", rendered);
        let inner = &rendered[2..rendered.len() - 2];
        let parsed: Vec<i64> = if inner.is_empty() {
            Vec::new()
        } else {
            inner.split(", ").map(|s| s.parse().unwrap()).collect()
        };
        prop_assert_eq!(parsed.as_slice(), set.elements());
    }
}
