//! The typed outcome: an optional value plus diagnostics.
//!
//! Presence of the value is an explicit tag (`Option<T>`), orthogonal to
//! whether the value itself is "null". A nullable value is modelled as
//! `Outcome<Option<U>>`: `Outcome::from_value(None)` holds a present null,
//! `Outcome::absent()` holds nothing.
//!
//! [`Outcome::and_then`] is the monadic bind: it runs the next step only while
//! a value keeps flowing and accumulates the diagnostics of every step that
//! actually ran.

use std::fmt;
use std::hash::Hash;

use crate::error::{OutcomeError, Result};
use crate::item::{Item, ItemRef};
use crate::items::{Items, OfType};
use crate::merge::merge;
use crate::void::Void;

/// Outcome of an operation that may produce a value of type `T`.
#[derive(Clone)]
pub struct Outcome<T> {
    pub(crate) value: Option<T>,
    pub(crate) items: Items,
}

impl<T> Outcome<T> {
    /// Outcome without a value and without items.
    pub const fn absent() -> Self {
        Self {
            value: None,
            items: Items::EMPTY,
        }
    }

    /// Outcome holding `value`.
    pub const fn from_value(value: T) -> Self {
        Self {
            value: Some(value),
            items: Items::EMPTY,
        }
    }

    /// Outcome without a value holding a single item.
    pub fn from_item<I>(item: I) -> Self
    where
        I: Item + Eq + Hash,
    {
        Self::absent().add(item)
    }

    pub(crate) const fn from_parts(value: Option<T>, items: Items) -> Self {
        Self { value, items }
    }

    pub const fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// The value, or [`OutcomeError::ValueNotPresent`] if there is none.
    pub fn value(&self) -> Result<&T> {
        self.value.as_ref().ok_or_else(|| self.not_present())
    }

    /// Consume the outcome, returning its value.
    pub fn into_value(self) -> Result<T> {
        match self.value {
            Some(value) => Ok(value),
            None => Err(not_present(&self.items)),
        }
    }

    pub const fn as_option(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn into_option(self) -> Option<T> {
        self.value
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

    pub fn has<K: Item>(&self) -> bool {
        self.get::<K>().next().is_some()
    }

    pub fn has_where<K: Item>(&self, predicate: impl FnMut(&K) -> bool) -> bool {
        self.get::<K>().any(predicate)
    }

    pub fn has_errors(&self) -> bool {
        self.items.has_errors()
    }

    /// Outcome with `item` appended to the log; the value is unchanged.
    pub fn add<I>(self, item: I) -> Self
    where
        I: Item + Eq + Hash,
    {
        self.add_ref(ItemRef::new(item))
    }

    pub fn add_ref(self, item: ItemRef) -> Self {
        Self::from_parts(self.value, self.items.pushed(item))
    }

    /// Like [`Outcome::add`], for callers holding an item that may be missing.
    pub fn try_add<I>(self, item: Option<I>) -> Result<Self>
    where
        I: Item + Eq + Hash,
    {
        match item {
            Some(item) => Ok(self.add(item)),
            None => Err(OutcomeError::argument_missing("item")),
        }
    }

    /// Outcome with an empty log; the value is unchanged.
    pub fn without_items(self) -> Self {
        Self::from_parts(self.value, Items::EMPTY)
    }

    /// The log as an untyped outcome; the value is discarded.
    pub fn to_void(&self) -> Void {
        Void::from_items(self.items.clone())
    }

    /// The log as an outcome of another type, without a value.
    ///
    /// A change of type never carries the value across.
    pub fn to_typed<U>(&self) -> Outcome<U> {
        Outcome::from_parts(None, self.items.clone())
    }

    /// The log as an outcome holding `value`.
    pub fn set_to<U>(&self, value: U) -> Outcome<U> {
        Outcome::from_parts(Some(value), self.items.clone())
    }

    /// This outcome if it has a value, otherwise the same log holding `default`.
    pub fn or(self, default: T) -> Self {
        self.or_with(|| default)
    }

    /// Like [`Outcome::or`], computing the default only when needed.
    pub fn or_with(self, default: impl FnOnce() -> T) -> Self {
        match self.value {
            Some(_) => self,
            None => Self::from_parts(Some(default()), self.items),
        }
    }

    /// Apply `f` to the value, keeping the log.
    ///
    /// Without a value `f` is not invoked and the result has no value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        self.and_then(|value| Outcome::from_value(f(value)))
    }

    /// Bind: feed the value into the next outcome-producing step.
    ///
    /// Without a value `f` is not invoked and the log passes through
    /// untouched. Otherwise the result holds this log followed by the log of
    /// `f`'s outcome, and `f`'s value (or absence).
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self.value {
            None => Outcome::from_parts(None, self.items),
            Some(value) => merge(Void::from_items(self.items), f(value)),
        }
    }

    /// Whether this outcome holds a value equal to `value`; the log is ignored.
    pub fn holds<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        self.value.as_ref().is_some_and(|own| own == value)
    }

    fn not_present(&self) -> OutcomeError {
        not_present(&self.items)
    }
}

fn not_present(items: &Items) -> OutcomeError {
    OutcomeError::value_not_present(items.summary())
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Self::absent()
    }
}

impl<T> From<T> for Outcome<T> {
    fn from(value: T) -> Self {
        Self::from_value(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Outcome")
            .field("value", &self.value)
            .field("items", &self.items)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Diagnostic;

    #[test]
    fn test_from_value_is_present() -> Result<()> {
        let outcome = Outcome::from_value(1);
        assert!(outcome.has_value());
        assert_eq!(*outcome.value()?, 1);
        Ok(())
    }

    #[test]
    fn test_from_item_is_absent_with_item() {
        let outcome: Outcome<i32> = Outcome::from_item(Diagnostic::error("boom"));
        assert!(!outcome.has_value());
        assert!(outcome.has_errors());
    }

    #[test]
    fn test_present_null_is_distinct_from_absent() {
        let null: Outcome<Option<String>> = Outcome::from_value(None);
        let absent: Outcome<Option<String>> = Outcome::absent();

        assert!(null.has_value());
        assert!(null.holds(&None));
        assert!(!absent.has_value());
        assert!(!absent.holds(&None));
    }

    #[test]
    fn test_value_without_value_reports_rendering() {
        let outcome: Outcome<String> = Outcome::absent().add(Diagnostic::error("ERROR"));

        assert_eq!(
            outcome.value().err(),
            Some(OutcomeError::value_not_present("ERROR"))
        );
        assert_eq!(
            outcome.into_value().err().map(|e| e.to_string()),
            Some(
                "The result 'ERROR' does not have a value. Use 'has_value' to check if a result has a value."
                    .to_string()
            )
        );
    }

    #[test]
    fn test_add_preserves_value() -> Result<()> {
        let outcome = Outcome::from_value(5).add(Diagnostic::informational("note"));
        assert_eq!(*outcome.value()?, 5);
        assert_eq!(outcome.items().len(), 1);
        Ok(())
    }

    #[test]
    fn test_without_items_preserves_value() {
        let outcome = Outcome::from_value(5)
            .add(Diagnostic::error("boom"))
            .without_items();
        assert!(outcome.holds(&5));
        assert!(outcome.items().is_empty());
    }

    #[test]
    fn test_to_typed_drops_value_keeps_items() {
        let text = Outcome::from_value("test").add(Diagnostic::warning("w"));
        let number: Outcome<i32> = text.to_typed();

        assert!(!number.has_value());
        assert_eq!(number.items(), text.items());
    }

    #[test]
    fn test_set_to_replaces_value_keeps_items() {
        let outcome = Outcome::from_value(5).add(Diagnostic::warning("w"));
        let replaced = outcome.set_to("test");

        assert!(replaced.holds(&"test"));
        assert_eq!(replaced.items(), outcome.items());
    }

    #[test]
    fn test_or_keeps_present_value() {
        let outcome = Outcome::from_value("initial")
            .add(Diagnostic::informational("a"))
            .or("default");
        assert!(outcome.holds(&"initial"));
        assert_eq!(outcome.items().len(), 1);
    }

    #[test]
    fn test_or_fills_absent_value() {
        let outcome: Outcome<&str> = Outcome::from_item(Diagnostic::informational("a"));
        let filled = outcome.or("default");
        assert!(filled.holds(&"default"));
        assert_eq!(filled.items().len(), 1);
    }

    #[test]
    fn test_map_skips_absent() {
        let mut invoked = false;
        let outcome: Outcome<i32> = Outcome::from_item(Diagnostic::error("e"));
        let mapped = outcome.map(|v| {
            invoked = true;
            v.to_string()
        });

        assert!(!invoked);
        assert!(!mapped.has_value());
        assert_eq!(mapped.items().len(), 1);
    }

    #[test]
    fn test_and_then_appends_step_items() {
        let first = Diagnostic::informational("first");
        let second = Diagnostic::informational("second");
        let outcome = Outcome::from_value(27)
            .add(first.clone())
            .and_then(|v| Outcome::from_value(v.to_string()).add(second.clone()));

        assert!(outcome.holds(&"27".to_string()));
        let messages: Vec<&Diagnostic> = outcome.get::<Diagnostic>().collect();
        assert_eq!(messages, vec![&first, &second]);
    }

    #[test]
    fn test_and_then_step_without_value_stops_value() {
        let outcome = Outcome::from_value(1)
            .and_then(|_| Outcome::<i32>::from_item(Diagnostic::error("stop")));

        assert!(!outcome.has_value());
        assert!(outcome.has_errors());
    }
}
