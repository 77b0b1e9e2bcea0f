//! The `Nothing` sentinel: a type-erased, allocation-free starting value.
//!
//! `Nothing` has no items and no value. Merged with any outcome, on either
//! side, it yields that outcome unchanged. Once an item is added it becomes
//! an ordinary [`Void`].

use std::hash::Hash;
use std::iter::{self, Empty};

use crate::item::Item;
use crate::void::Void;

/// Identity element of the merge algebra.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Nothing;

/// The [`Nothing`] sentinel.
pub const NOTHING: Nothing = Nothing;

impl Nothing {
    pub const fn has_value(self) -> bool {
        false
    }

    pub const fn has_errors(self) -> bool {
        false
    }

    /// Always empty: `Nothing` holds no items.
    pub const fn get<K: Item>(self) -> Empty<&'static K> {
        iter::empty()
    }

    pub const fn has<K: Item>(self) -> bool {
        false
    }

    /// Untyped outcome holding `item`.
    pub fn add<I>(self, item: I) -> Void
    where
        I: Item + Eq + Hash,
    {
        Void::from_item(item)
    }

    /// Returns [`Void::EMPTY`].
    pub const fn without_items(self) -> Void {
        Void::EMPTY
    }
}

impl From<Nothing> for Void {
    fn from(_: Nothing) -> Self {
        Self::EMPTY
    }
}
