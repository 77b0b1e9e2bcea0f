//! Structural equality and hashing across outcome shapes.
//!
//! Rules:
//! - Two `Void`s are equal iff their logs are sequence-equal
//! - Two typed outcomes are equal iff their logs are sequence-equal and
//!   either both hold values that compare equal, or both are absent and share
//!   the same declared value type
//! - A `Void` never equals a typed outcome or `Nothing`, whatever the items
//! - `Nothing` only equals `Nothing`
//!
//! Absence is not interchangeable across types: `Outcome::<i32>::absent()`
//! and `Outcome::<i64>::absent()` are unequal, yet they may hash alike.

use std::any::type_name;
use std::hash::{Hash, Hasher};

use crate::nothing::Nothing;
use crate::outcome::Outcome;
use crate::void::Void;

// Shape discriminants mixed into every hash.
const VOID: u8 = 0;
const ABSENT: u8 = 1;
const PRESENT: u8 = 2;

impl PartialEq for Void {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Eq for Void {}

impl Hash for Void {
    fn hash<H: Hasher>(&self, state: &mut H) {
        VOID.hash(state);
        self.items.hash(state);
    }
}

impl<T, U> PartialEq<Outcome<U>> for Outcome<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Outcome<U>) -> bool {
        let values_match = match (&self.value, &other.value) {
            (Some(own), Some(theirs)) => own == theirs,
            (None, None) => type_name::<T>() == type_name::<U>(),
            _ => false,
        };
        values_match && self.items == other.items
    }
}

impl<T: Eq> Eq for Outcome<T> {}

impl<T: Hash> Hash for Outcome<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.value {
            Some(value) => {
                PRESENT.hash(state);
                value.hash(state);
            }
            None => ABSENT.hash(state),
        }
        self.items.hash(state);
    }
}

impl<T> PartialEq<Outcome<T>> for Void {
    fn eq(&self, _: &Outcome<T>) -> bool {
        false
    }
}

impl<T> PartialEq<Void> for Outcome<T> {
    fn eq(&self, _: &Void) -> bool {
        false
    }
}

impl PartialEq<Nothing> for Void {
    fn eq(&self, _: &Nothing) -> bool {
        false
    }
}

impl PartialEq<Void> for Nothing {
    fn eq(&self, _: &Void) -> bool {
        false
    }
}

impl<T> PartialEq<Nothing> for Outcome<T> {
    fn eq(&self, _: &Nothing) -> bool {
        false
    }
}

impl<T> PartialEq<Outcome<T>> for Nothing {
    fn eq(&self, _: &Outcome<T>) -> bool {
        false
    }
}
