//! Asynchronous sequence combinators.
//!
//! Each element of the input stream is awaited in order and merged into a
//! single accumulator before the next one is polled. Nothing runs
//! concurrently, so item order and value resolution are exactly those of the
//! synchronous combinators in [`crate::combine`].

use futures::future::{self, Future, FutureExt, Map};
use futures::stream::{self, Stream, StreamExt};

use crate::combine::{pairwise_step, FoldState};
use crate::merge::Merge;
use crate::outcome::Outcome;
use crate::void::Void;

/// Merge a stream of untyped outcomes in order.
pub async fn combine_void_stream<S>(outcomes: S) -> Void
where
    S: Stream<Item = Void>,
{
    outcomes
        .fold(Void::EMPTY, |acc, next| future::ready(acc.merge(next)))
        .await
}

/// Merge a stream of typed outcomes in order; the last present value wins.
pub async fn combine_stream<T, S>(outcomes: S) -> Outcome<T>
where
    S: Stream<Item = Outcome<T>>,
{
    outcomes
        .fold(Outcome::<T>::absent(), |acc, next| future::ready(acc.merge(next)))
        .await
}

/// Fold the present values of a stream into `seed`, keeping every item.
pub async fn combine_fold_stream<T, A, S, F>(outcomes: S, seed: A, mut f: F) -> Outcome<A>
where
    S: Stream<Item = Outcome<T>>,
    F: FnMut(A, T) -> A,
{
    outcomes
        .fold(FoldState::new(seed), |state, next| {
            future::ready(state.step(next, &mut f))
        })
        .await
        .finish()
}

/// Merge a stream of typed outcomes, joining two present values with `f`.
pub async fn combine_with_stream<T, S, F>(outcomes: S, mut f: F) -> Outcome<T>
where
    S: Stream<Item = Outcome<T>>,
    F: FnMut(T, T) -> T,
{
    outcomes
        .fold(Outcome::<T>::absent(), |acc, next| {
            future::ready(pairwise_step(acc, next, &mut f))
        })
        .await
}

/// Await `futures` one at a time, in order, merging each result.
///
/// A future is not polled before the previous one has completed.
pub async fn combine_futures<T, I, Fut>(futures: I) -> Outcome<T>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Outcome<T>>,
{
    combine_stream(stream::iter(futures).then(|pending| pending)).await
}

/// Adaptors for futures resolving to a typed outcome.
pub trait OutcomeFutureExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Resolve to the outcome's log only, dropping the value.
    fn into_void(self) -> Map<Self, fn(Outcome<T>) -> Void> {
        self.map(Void::from as fn(Outcome<T>) -> Void)
    }
}

impl<T, F> OutcomeFutureExt<T> for F where F: Future<Output = Outcome<T>> {}
