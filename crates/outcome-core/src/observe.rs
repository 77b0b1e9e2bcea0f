//! Conditional callbacks.
//!
//! Each combinator runs its callback at most once, synchronously, when its
//! condition holds, and then hands the outcome back so calls can be chained:
//!
//! ```
//! use outcome_core::{Diagnostic, Outcome};
//!
//! let mut seen = Vec::new();
//! let outcome = Outcome::from_value(5)
//!     .add(Diagnostic::warning("slow"))
//!     .on_value(|v| seen.push(format!("value {v}")))
//!     .on_has_item::<Diagnostic>(|d| seen.push(d.message.clone()))
//!     .on_no_value(|_| seen.push("unreachable".into()));
//!
//! assert!(outcome.holds(&5));
//! assert_eq!(seen, ["value 5", "slow"]);
//! ```

use crate::item::Item;
use crate::items::Items;
use crate::outcome::Outcome;
use crate::void::Void;

impl<T> Outcome<T> {
    /// Run `f` with the value if there is one.
    #[must_use]
    pub fn on_value(self, f: impl FnOnce(&T)) -> Self {
        if let Some(value) = &self.value {
            f(value);
        }
        self
    }

    /// Run `f` with the log if there is no value.
    #[must_use]
    pub fn on_no_value(self, f: impl FnOnce(&Items)) -> Self {
        if self.value.is_none() {
            f(&self.items);
        }
        self
    }

    /// Run `f` with the first item of type `K`, if any.
    #[must_use]
    pub fn on_has_item<K: Item>(self, f: impl FnOnce(&K)) -> Self {
        if let Some(item) = self.get::<K>().next() {
            f(item);
        }
        self
    }

    /// Run `f` with the first item of type `K` that satisfies `predicate`.
    #[must_use]
    pub fn on_has_item_where<K: Item>(
        self,
        mut predicate: impl FnMut(&K) -> bool,
        f: impl FnOnce(&K),
    ) -> Self {
        if let Some(item) = self.get::<K>().find(|item| predicate(item)) {
            f(item);
        }
        self
    }

    /// Replace an outcome without a value by the one `f` builds from its log.
    ///
    /// An outcome holding a value is returned unchanged and `f` is not called.
    pub fn or_else(self, f: impl FnOnce(Void) -> Self) -> Self {
        match self.value {
            Some(_) => self,
            None => f(Void::from_items(self.items)),
        }
    }
}

impl Void {
    /// Run `f` with the first item of type `K`, if any.
    #[must_use]
    pub fn on_has_item<K: Item>(self, f: impl FnOnce(&K)) -> Self {
        if let Some(item) = self.get::<K>().next() {
            f(item);
        }
        self
    }

    /// Run `f` with the first item of type `K` that satisfies `predicate`.
    #[must_use]
    pub fn on_has_item_where<K: Item>(
        self,
        mut predicate: impl FnMut(&K) -> bool,
        f: impl FnOnce(&K),
    ) -> Self {
        if let Some(item) = self.get::<K>().find(|item| predicate(item)) {
            f(item);
        }
        self
    }
}
