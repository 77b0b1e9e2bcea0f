//! Property tests for the algebraic laws of outcomes.
//!
//! # Laws tested:
//! 1. Identity: `Nothing` is a two-sided identity of merge
//! 2. Associativity: item logs concatenate regardless of grouping
//! 3. Tie-break: the right value wins only when present
//! 4. Equality/hash consistency: equal outcomes hash alike
//! 5. Short-circuit: bind never runs on an absent value
//! 6. Combinators agree with a left fold of merges
//!
//! Run with: cargo test --package outcome-core --test outcome_properties
//! Reproducible: Set `PROPTEST_SEED` environment variable for deterministic runs

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls
)]

mod common;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use common::{fast_config, standard_config, test_items, typed_outcome, void_outcome, TestItem};
use itertools::Itertools;
use outcome_core::{combine, combine_with, ItemRef, Outcome, Void, NOTHING};
use proptest::prelude::*;

fn hash_of<H: Hash>(value: &H) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn log_of<'a>(outcomes: impl IntoIterator<Item = &'a outcome_core::Items>) -> Vec<ItemRef> {
    outcomes
        .into_iter()
        .flat_map(|items| items.iter().cloned())
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// MERGE LAWS
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(fast_config())]

    #[test]
    fn prop_nothing_is_identity(typed in typed_outcome(), void in void_outcome()) {
        prop_assert_eq!(NOTHING + typed.clone(), typed.clone());
        prop_assert_eq!(typed.clone() + NOTHING, typed);
        prop_assert_eq!(NOTHING + void.clone(), void.clone());
        prop_assert_eq!(void.clone() + NOTHING, void);
    }

    #[test]
    fn prop_item_accumulation_is_associative(
        a in typed_outcome(),
        b in void_outcome(),
        c in typed_outcome(),
    ) {
        let expected = log_of([a.items(), b.items(), c.items()]);

        let left = (a.clone() + b.clone()) + c.clone();
        let right = a + (b + c);

        prop_assert_eq!(left.items().iter().cloned().collect_vec(), expected.clone());
        prop_assert_eq!(right.items().iter().cloned().collect_vec(), expected);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_right_value_wins_only_when_present(a in typed_outcome(), b in typed_outcome()) {
        let expected = b.as_option().or(a.as_option()).copied();
        let merged = a + b;
        prop_assert_eq!(merged.as_option().copied(), expected);
    }

    #[test]
    fn prop_void_sides_never_touch_the_value(typed in typed_outcome(), void in void_outcome()) {
        let value = typed.as_option().copied();
        prop_assert_eq!((typed.clone() + void.clone()).as_option().copied(), value);
        prop_assert_eq!((void + typed).as_option().copied(), value);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// EQUALITY LAWS
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(standard_config())]

    #[test]
    fn prop_equal_outcomes_hash_alike(value in proptest::option::of(any::<i32>()), items in test_items()) {
        let build = || {
            let seed = value.map_or_else(Outcome::absent, Outcome::from_value);
            items.iter().cloned().fold(seed, Outcome::add)
        };
        let (a, b) = (build(), build());

        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn prop_void_equality_follows_item_order(items in test_items()) {
        let forward = items.iter().cloned().fold(Void::EMPTY, Void::add);
        let backward = items.iter().rev().cloned().fold(Void::EMPTY, Void::add);
        let palindrome = items.iter().eq(items.iter().rev());

        prop_assert_eq!(forward == backward, palindrome);
    }

    #[test]
    fn prop_void_never_equals_typed(void in void_outcome()) {
        let typed: Outcome<i32> = void.to_typed();
        prop_assert!(void != typed);
        prop_assert_eq!(typed.items(), void.items());
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BIND AND COMBINATOR LAWS
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(fast_config())]

    #[test]
    fn prop_bind_short_circuits(items in test_items(), extra in 0_u32..100) {
        let absent = items.into_iter().fold(Outcome::<i32>::absent(), Outcome::add);
        let mut invoked = false;

        let bound = absent.clone().and_then(|v| {
            invoked = true;
            Outcome::from_value(v).add(TestItem::plain(extra))
        });

        prop_assert!(!invoked);
        prop_assert!(!bound.has_value());
        prop_assert_eq!(bound.items(), absent.items());
    }

    #[test]
    fn prop_bind_appends_step_items(outcome in typed_outcome(), extra in 0_u32..100) {
        prop_assume!(outcome.has_value());
        let bound = outcome
            .clone()
            .and_then(|v| Outcome::from_value(i64::from(v)).add(TestItem::plain(extra)));

        let expected = TestItem::plain(extra);
        prop_assert_eq!(bound.items().len(), outcome.items().len() + 1);
        prop_assert_eq!(
            bound.items().last().and_then(|item| item.downcast_ref::<TestItem>()),
            Some(&expected)
        );
    }

    #[test]
    fn prop_combine_is_fold_of_merges(outcomes in proptest::collection::vec(typed_outcome(), 0..5)) {
        let folded = outcomes
            .iter()
            .cloned()
            .fold(Outcome::<i32>::absent(), |acc, next| acc + next);
        prop_assert_eq!(combine(outcomes), folded);
    }

    #[test]
    fn prop_combine_with_sums_present_values(outcomes in proptest::collection::vec(typed_outcome(), 0..5)) {
        let present: Vec<i32> = outcomes.iter().filter_map(|o| o.as_option().copied()).collect();
        let expected = if present.is_empty() { None } else { Some(present.iter().sum::<i32>()) };

        let combined = combine_with(outcomes.clone(), |a, b| a + b);

        prop_assert_eq!(combined.as_option().copied(), expected);
        prop_assert_eq!(
            combined.items().len(),
            outcomes.iter().map(|o| o.items().len()).sum::<usize>()
        );
    }

    #[test]
    fn prop_round_trip_through_void(outcome in typed_outcome()) {
        let back = outcome.to_void().to_typed::<i32>();
        prop_assert!(!back.has_value());
        prop_assert_eq!(back.items(), outcome.items());
    }
}
