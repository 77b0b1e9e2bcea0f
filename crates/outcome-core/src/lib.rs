//! Outcome-core - Immutable outcome values with an append-only diagnostic log
//!
//! Every operation returns one outcome carrying an optional value and the
//! ordered diagnostics produced while computing it. This crate provides:
//! - Outcome shapes: [`Outcome<T>`], the untyped [`Void`] and the [`Nothing`] sentinel
//! - Diagnostic items and the persistent [`Items`] log
//! - The merge algebra (`+`, [`merge`]) and monadic bind ([`Outcome::and_then`])
//! - Sequence combinators, synchronous and over `futures` streams
//! - Canonical rendering, runtime inspection and structured reports
//!
//! ```
//! use outcome_core::{Diagnostic, Outcome, Void};
//!
//! let parsed = Outcome::from_value("42")
//!     .add(Diagnostic::warning("legacy format"))
//!     .and_then(|raw| match raw.parse::<i32>() {
//!         Ok(n) => Outcome::from_value(n),
//!         Err(e) => Outcome::from_item(Diagnostic::error(e.to_string())),
//!     });
//!
//! let outcome = parsed + Void::from_item(Diagnostic::informational("cached"));
//! assert!(outcome.holds(&42));
//! assert_eq!(outcome.to_string(), "[42] cached (and 1 more items)");
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod combine;
mod equality;
pub mod error;
pub mod format;
pub mod inspect;
pub mod item;
pub mod items;
pub mod merge;
pub mod nothing;
mod observe;
pub mod outcome;
pub mod report;
pub mod stream;
pub mod void;

pub use combine::{combine, combine_fold, combine_void, combine_with, OutcomeIterExt};
pub use error::{OutcomeError, Result};
pub use format::ValueRepr;
pub use inspect::{Inspect, Shape};
pub use item::{Diagnostic, Item, ItemInfo, ItemRef, Severity};
pub use items::Items;
pub use merge::{merge, Merge};
pub use nothing::{Nothing, NOTHING};
pub use outcome::Outcome;
pub use report::{emit, ItemReport, Report};
pub use stream::{
    combine_fold_stream, combine_futures, combine_stream, combine_void_stream,
    combine_with_stream, OutcomeFutureExt,
};
pub use void::Void;
