//! Shared fixtures for integration tests.
//!
//! - [`TestItem`]: a diagnostic item with an identity and optional info
//! - Proptest strategies for items, logs and outcomes
//! - Deterministic proptest configuration (`PROPTEST_SEED`, `PROPTEST_CASES`)

#![allow(dead_code)]

use std::env;
use std::fmt;

use outcome_core::{Item, ItemInfo, Outcome, Void};
use proptest::prelude::*;
use proptest::test_runner::{Config, RngSeed};

// ═══════════════════════════════════════════════════════════════════════════
// TEST ITEM
// ═══════════════════════════════════════════════════════════════════════════

/// Item identified by `id`; renders as its message, or `item-{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TestItem {
    pub id: u32,
    pub info: Option<(bool, String)>,
}

impl TestItem {
    /// Item without info.
    pub const fn plain(id: u32) -> Self {
        Self { id, info: None }
    }

    pub fn error(id: u32, message: &str) -> Self {
        Self {
            id,
            info: Some((true, message.to_string())),
        }
    }

    pub fn note(id: u32, message: &str) -> Self {
        Self {
            id,
            info: Some((false, message.to_string())),
        }
    }
}

impl fmt::Display for TestItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.info {
            Some((_, message)) => f.write_str(message),
            None => write!(f, "item-{}", self.id),
        }
    }
}

impl ItemInfo for TestItem {
    fn is_error(&self) -> bool {
        self.info.as_ref().is_some_and(|(is_error, _)| *is_error)
    }

    fn message(&self) -> &str {
        self.info.as_ref().map_or("", |(_, message)| message)
    }
}

impl Item for TestItem {
    fn info(&self) -> Option<&dyn ItemInfo> {
        self.info.as_ref().map(|_| self as &dyn ItemInfo)
    }
}

/// Ids of every `TestItem` in a log, in order.
pub fn ids<'a>(items: impl IntoIterator<Item = &'a TestItem>) -> Vec<u32> {
    items.into_iter().map(|item| item.id).collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// STRATEGIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn test_item() -> impl Strategy<Value = TestItem> {
    (0_u32..1000, any::<bool>(), proptest::option::of(any::<bool>())).prop_map(
        |(id, with_info, is_error)| match (with_info, is_error) {
            (true, Some(true)) => TestItem::error(id, "error"),
            (true, _) => TestItem::note(id, "note"),
            (false, _) => TestItem::plain(id),
        },
    )
}

pub fn test_items() -> impl Strategy<Value = Vec<TestItem>> {
    proptest::collection::vec(test_item(), 0..6)
}

pub fn void_outcome() -> impl Strategy<Value = Void> {
    test_items().prop_map(|items| items.into_iter().fold(Void::EMPTY, Void::add))
}

pub fn typed_outcome() -> impl Strategy<Value = Outcome<i32>> {
    (proptest::option::of(-100_i32..100), test_items()).prop_map(|(value, items)| {
        let seed = value.map_or_else(Outcome::absent, Outcome::from_value);
        items.into_iter().fold(seed, Outcome::add)
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// PROPTEST CONFIG
// ═══════════════════════════════════════════════════════════════════════════

const DEFAULT_SEED: u64 = 0x1234_5678_9ABC_DEF0;

pub const FAST_CASES: u32 = 64;

pub const STANDARD_CASES: u32 = 100;

/// Fast deterministic config for cheap algebraic laws.
pub fn fast_config() -> Config {
    config_with(FAST_CASES)
}

/// Standard deterministic config.
pub fn standard_config() -> Config {
    config_with(STANDARD_CASES)
}

fn config_with(default_cases: u32) -> Config {
    Config {
        cases: parse_env("PROPTEST_CASES").unwrap_or(default_cases),
        max_shrink_iters: 256,
        rng_seed: RngSeed::Fixed(seed_from_env().unwrap_or(DEFAULT_SEED)),
        ..Config::default()
    }
}

fn seed_from_env() -> Option<u64> {
    env::var("PROPTEST_SEED").ok().and_then(|s| {
        match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => u64::from_str_radix(hex, 16).ok(),
            None => s.parse().ok(),
        }
    })
}

fn parse_env(name: &str) -> Option<u32> {
    env::var(name).ok().and_then(|s| s.parse().ok())
}
