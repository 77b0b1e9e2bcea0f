//! Canonical string rendering of outcomes.
//!
//! The rendered form is consumed by logs and assertion tooling, so its shape
//! is fixed:
//!
//! | outcome | rendering |
//! |---------|-----------|
//! | `Outcome::from_value(5)` | `[5]` |
//! | `Outcome::from_value("test")` | `["test"]` |
//! | `Outcome::from_value(None::<String>)` | `[<null>]` |
//! | value `5`, one item `Error` | `[5] Error` |
//! | absent, items `Error` then `Info` | `Info (and 1 more items)` |
//! | `Void::EMPTY` | `<void>` |
//! | `NOTHING` | `Nothing` |

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::nothing::Nothing;
use crate::outcome::Outcome;
use crate::void::Void;

/// How a value is written inside the `[...]` segment of a rendering.
///
/// `is_null` and `as_text` also let runtime equality compare values whose
/// declared types differ.
pub trait ValueRepr {
    fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Whether this is a present null, rendered `<null>`.
    fn is_null(&self) -> bool {
        false
    }

    /// The text of a string-like value.
    fn as_text(&self) -> Option<&str> {
        None
    }
}

macro_rules! display_repr {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ValueRepr for $ty {
                fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

display_repr! {
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64, bool, char,
}

macro_rules! quoted_repr {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ValueRepr for $ty {
                fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "\"{self}\"")
                }

                fn as_text(&self) -> Option<&str> {
                    Some(self)
                }
            }
        )*
    };
}

quoted_repr! { str, String, Cow<'_, str> }

impl<T: ValueRepr> ValueRepr for Option<T> {
    fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => value.fmt_repr(f),
            None => f.write_str("<null>"),
        }
    }

    fn is_null(&self) -> bool {
        match self {
            Some(value) => value.is_null(),
            None => true,
        }
    }

    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(ValueRepr::as_text)
    }
}

macro_rules! transparent_repr {
    ($($wrapper:ident),* $(,)?) => {
        $(
            impl<T: ValueRepr + ?Sized> ValueRepr for $wrapper<T> {
                fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    (**self).fmt_repr(f)
                }

                fn is_null(&self) -> bool {
                    (**self).is_null()
                }

                fn as_text(&self) -> Option<&str> {
                    (**self).as_text()
                }
            }
        )*
    };
}

transparent_repr! { Box, Rc, Arc }

impl<T: ValueRepr + ?Sized> ValueRepr for &T {
    fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_repr(f)
    }

    fn is_null(&self) -> bool {
        (**self).is_null()
    }

    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<T: ValueRepr> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.items.summary();
        if let Some(value) = &self.value {
            f.write_str("[")?;
            value.fmt_repr(f)?;
            f.write_str("]")?;
            if !summary.is_empty() {
                f.write_str(" ")?;
            }
        }
        f.write_str(&summary)
    }
}

impl fmt::Display for Void {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            f.write_str("<void>")
        } else {
            fmt::Display::fmt(&self.items, f)
        }
    }
}

impl fmt::Display for Nothing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Nothing")
    }
}
