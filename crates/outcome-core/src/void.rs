//! The untyped outcome: diagnostics only, never a value.

use std::hash::Hash;

use crate::error::{OutcomeError, Result};
use crate::item::{Item, ItemRef};
use crate::items::{Items, OfType};
use crate::outcome::Outcome;

/// Outcome of an operation that produces no value, only diagnostics.
///
/// `Void` values are immutable; every operation returns a new outcome.
#[derive(Clone, Default)]
pub struct Void {
    pub(crate) items: Items,
}

impl Void {
    /// The untyped outcome without any items.
    pub const EMPTY: Self = Self {
        items: Items::EMPTY,
    };

    /// Returns [`Void::EMPTY`].
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Untyped outcome holding a single item.
    pub fn from_item<I>(item: I) -> Self
    where
        I: Item + Eq + Hash,
    {
        Self::EMPTY.add(item)
    }

    pub(crate) const fn from_items(items: Items) -> Self {
        Self { items }
    }

    /// Always `false`: an untyped outcome never carries a value.
    pub const fn has_value(&self) -> bool {
        false
    }

    pub fn items(&self) -> &Items {
        &self.items
    }

    /// Items of exactly type `K`, in log order.
    pub fn get<K: Item>(&self) -> OfType<'_, K> {
        self.items.of_type()
    }

    /// Items of type `K` that satisfy `predicate`.
    pub fn get_where<'a, K, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a K> + 'a
    where
        K: Item,
        P: FnMut(&&'a K) -> bool + 'a,
    {
        self.get::<K>().filter(predicate)
    }

    /// Whether the log holds at least one item of type `K`.
    pub fn has<K: Item>(&self) -> bool {
        self.get::<K>().next().is_some()
    }

    /// Whether the log holds an item of type `K` satisfying `predicate`.
    pub fn has_where<K: Item>(&self, predicate: impl FnMut(&K) -> bool) -> bool {
        self.get::<K>().any(predicate)
    }

    pub fn has_errors(&self) -> bool {
        self.items.has_errors()
    }

    /// Outcome with `item` appended to the log.
    pub fn add<I>(self, item: I) -> Self
    where
        I: Item + Eq + Hash,
    {
        self.add_ref(ItemRef::new(item))
    }

    /// Outcome with an already shared item appended to the log.
    pub fn add_ref(self, item: ItemRef) -> Self {
        Self::from_items(self.items.pushed(item))
    }

    /// Like [`Void::add`], for callers holding an item that may be missing.
    pub fn try_add<I>(self, item: Option<I>) -> Result<Self>
    where
        I: Item + Eq + Hash,
    {
        item.map(|item| self.add(item))
            .ok_or_else(|| OutcomeError::argument_missing("item"))
    }

    /// Outcome with an empty log.
    pub fn without_items(mut self) -> Self {
        self.items = Items::EMPTY;
        self
    }

    /// The same log as a typed outcome without a value.
    pub fn to_typed<T>(&self) -> Outcome<T> {
        Outcome::from_parts(None, self.items.clone())
    }

    /// The same log as a typed outcome holding `value`.
    pub fn set_to<T>(&self, value: T) -> Outcome<T> {
        Outcome::from_parts(Some(value), self.items.clone())
    }

    pub(crate) fn into_items(self) -> Items {
        self.items
    }
}

impl<T> From<Outcome<T>> for Void {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.to_void()
    }
}

impl std::fmt::Debug for Void {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Void").field("items", &self.items).finish()
    }
}
