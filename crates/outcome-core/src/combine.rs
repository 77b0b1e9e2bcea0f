//! Sequence combinators: fold many outcomes into one.
//!
//! Every combinator keeps all items of all inputs, in iteration order. They
//! differ only in how values are resolved:
//!
//! - [`combine_void`] / [`combine`]: left fold over merge; the last present
//!   value wins
//! - [`combine_fold`]: present values are folded into an accumulator; the
//!   result always holds the accumulator
//! - [`combine_with`]: two present values are joined with a caller function,
//!   otherwise the merge tie-break applies
//!
//! The fold steps are shared with the asynchronous variants in
//! [`crate::stream`].

use std::iter::Sum;

use crate::items::Items;
use crate::merge::Merge;
use crate::outcome::Outcome;
use crate::void::Void;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// FOLD STEPS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Running state of an accumulator fold.
pub(crate) struct FoldState<A> {
    pub(crate) acc: A,
    pub(crate) items: Items,
}

impl<A> FoldState<A> {
    pub(crate) const fn new(seed: A) -> Self {
        Self {
            acc: seed,
            items: Items::EMPTY,
        }
    }

    pub(crate) fn step<T>(self, next: Outcome<T>, f: &mut impl FnMut(A, T) -> A) -> Self {
        let acc = match next.value {
            Some(value) => f(self.acc, value),
            None => self.acc,
        };
        Self {
            acc,
            items: self.items.concat(next.items),
        }
    }

    pub(crate) fn finish(self) -> Outcome<A> {
        Outcome::from_parts(Some(self.acc), self.items)
    }
}

/// One step of the pairwise fold.
pub(crate) fn pairwise_step<T>(
    acc: Outcome<T>,
    next: Outcome<T>,
    f: &mut impl FnMut(T, T) -> T,
) -> Outcome<T> {
    let items = acc.items.concat(next.items);
    let value = match (acc.value, next.value) {
        (Some(left), Some(right)) => Some(f(left, right)),
        (left, right) => right.or(left),
    };
    Outcome::from_parts(value, items)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// COMBINATORS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Merge untyped outcomes left to right. Empty input yields [`Void::EMPTY`].
pub fn combine_void<I>(outcomes: I) -> Void
where
    I: IntoIterator<Item = Void>,
{
    outcomes
        .into_iter()
        .fold(Void::EMPTY, |acc, next| acc.merge(next))
}

/// Merge typed outcomes left to right, starting from an absent outcome.
///
/// The result holds the items of all inputs and the value of the last input
/// that had one.
pub fn combine<T, I>(outcomes: I) -> Outcome<T>
where
    I: IntoIterator<Item = Outcome<T>>,
{
    outcomes
        .into_iter()
        .fold(Outcome::<T>::absent(), |acc, next| acc.merge(next))
}

/// Fold the present values into `seed` with `f`, keeping every item.
///
/// The result always has a value, even if no input had one.
pub fn combine_fold<T, A, I, F>(outcomes: I, seed: A, mut f: F) -> Outcome<A>
where
    I: IntoIterator<Item = Outcome<T>>,
    F: FnMut(A, T) -> A,
{
    outcomes
        .into_iter()
        .fold(FoldState::new(seed), |state, next| state.step(next, &mut f))
        .finish()
}

/// Merge typed outcomes, joining two present values with `f`.
///
/// When either side of a running pair has no value the merge tie-break
/// applies: the present side is kept, or the pair stays absent.
pub fn combine_with<T, I, F>(outcomes: I, mut f: F) -> Outcome<T>
where
    I: IntoIterator<Item = Outcome<T>>,
    F: FnMut(T, T) -> T,
{
    outcomes
        .into_iter()
        .fold(Outcome::<T>::absent(), |acc, next| pairwise_step(acc, next, &mut f))
}

impl Sum for Void {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        combine_void(iter)
    }
}

impl<T> Sum for Outcome<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        combine(iter)
    }
}

/// The combinators as iterator methods.
pub trait OutcomeIterExt<T>: Iterator<Item = Outcome<T>> + Sized {
    /// See [`combine`].
    fn combine(self) -> Outcome<T> {
        combine(self)
    }

    /// See [`combine_fold`].
    fn combine_fold<A, F>(self, seed: A, f: F) -> Outcome<A>
    where
        F: FnMut(A, T) -> A,
    {
        combine_fold(self, seed, f)
    }

    /// See [`combine_with`].
    fn combine_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnMut(T, T) -> T,
    {
        combine_with(self, f)
    }
}

impl<T, I> OutcomeIterExt<T> for I where I: Iterator<Item = Outcome<T>> {}
