//! The merge algebra.
//!
//! Merging always produces a new outcome holding the left items followed by
//! the right items. The value is resolved by shape:
//!
//! | left | right | value |
//! |------|-------|-------|
//! | `Void` | `Void` | none |
//! | `Outcome<T>` | `Void` | left |
//! | `Void` | `Outcome<T>` | right |
//! | `Outcome<T>` | `Outcome<T>` | right if present, else left |
//!
//! [`Nothing`] is a strict identity on both sides. Merging outcomes of two
//! different value types does not compile.
//!
//! The `+` and `+=` operators are thin wrappers over [`Merge`].

use std::ops::{Add, AddAssign};

use crate::nothing::Nothing;
use crate::outcome::Outcome;
use crate::void::Void;

/// Combine two outcomes into one.
pub trait Merge<Rhs = Self> {
    type Output;

    fn merge(self, rhs: Rhs) -> Self::Output;
}

/// Merge `left` with `right`. Same as `left + right`.
pub fn merge<L, R>(left: L, right: R) -> L::Output
where
    L: Merge<R>,
{
    left.merge(right)
}

impl Merge for Void {
    type Output = Self;

    fn merge(self, rhs: Self) -> Self {
        Self::from_items(self.into_items().concat(rhs.into_items()))
    }
}

impl<T> Merge<Void> for Outcome<T> {
    type Output = Self;

    fn merge(self, rhs: Void) -> Self {
        Self::from_parts(self.value, self.items.concat(rhs.into_items()))
    }
}

impl<T> Merge<Outcome<T>> for Void {
    type Output = Outcome<T>;

    fn merge(self, rhs: Outcome<T>) -> Outcome<T> {
        Outcome::from_parts(rhs.value, self.into_items().concat(rhs.items))
    }
}

impl<T> Merge for Outcome<T> {
    type Output = Self;

    /// The later value supersedes the earlier one only when it is present.
    fn merge(self, rhs: Self) -> Self {
        Self::from_parts(rhs.value.or(self.value), self.items.concat(rhs.items))
    }
}

impl Merge for Nothing {
    type Output = Self;

    fn merge(self, _: Self) -> Self {
        self
    }
}

impl Merge<Void> for Nothing {
    type Output = Void;

    fn merge(self, rhs: Void) -> Void {
        rhs
    }
}

impl<T> Merge<Outcome<T>> for Nothing {
    type Output = Outcome<T>;

    fn merge(self, rhs: Outcome<T>) -> Outcome<T> {
        rhs
    }
}

impl Merge<Nothing> for Void {
    type Output = Self;

    fn merge(self, _: Nothing) -> Self {
        self
    }
}

impl<T> Merge<Nothing> for Outcome<T> {
    type Output = Self;

    fn merge(self, _: Nothing) -> Self {
        self
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// OPERATORS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

macro_rules! merge_operator {
    ($( [$($generic:ident),*] $lhs:ty => $rhs:ty ),* $(,)?) => {
        $(
            impl<$($generic),*> Add<$rhs> for $lhs {
                type Output = <$lhs as Merge<$rhs>>::Output;

                fn add(self, rhs: $rhs) -> Self::Output {
                    self.merge(rhs)
                }
            }
        )*
    };
}

merge_operator! {
    [] Void => Void,
    [T] Outcome<T> => Void,
    [T] Void => Outcome<T>,
    [T] Outcome<T> => Outcome<T>,
    [] Nothing => Nothing,
    [] Nothing => Void,
    [T] Nothing => Outcome<T>,
    [] Void => Nothing,
    [T] Outcome<T> => Nothing,
}

macro_rules! merge_assign_operator {
    ($( [$($generic:ident),*] $lhs:ty => $rhs:ty ),* $(,)?) => {
        $(
            impl<$($generic),*> AddAssign<$rhs> for $lhs {
                fn add_assign(&mut self, rhs: $rhs) {
                    *self = std::mem::take(self).merge(rhs);
                }
            }
        )*
    };
}

merge_assign_operator! {
    [] Void => Void,
    [T] Outcome<T> => Void,
    [T] Outcome<T> => Outcome<T>,
    [] Nothing => Nothing,
    [] Void => Nothing,
    [T] Outcome<T> => Nothing,
}
