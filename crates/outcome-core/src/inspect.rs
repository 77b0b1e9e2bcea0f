//! Object-safe view over any outcome shape.
//!
//! Assertion helpers and other collaborators that must handle outcomes of
//! unknown type work through `&dyn Inspect`. The view exposes the log, value
//! presence, the value as `&dyn Any`, the canonical rendering and structural
//! equality decided at runtime.
//!
//! Runtime equality agrees with the static `PartialEq` impls wherever both
//! apply. Two typed outcomes with equal logs are equal when:
//!
//! - both are absent and share a declared type (compared by [`TypeId`])
//! - both hold values of the same type that compare equal
//! - both hold a present null, whatever the declared types
//! - both hold string-like values with the same text, so `Outcome<String>`
//!   and `Outcome<&str>` agree at runtime as they do under `==`
//!
//! Other values of different types, such as `5_i32` and `5_i64`, are unequal.

use std::any::{type_name, Any, TypeId};

use crate::format::ValueRepr;
use crate::items::Items;
use crate::nothing::Nothing;
use crate::outcome::Outcome;
use crate::void::Void;

static NO_ITEMS: Items = Items::EMPTY;

/// Structural kind of an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// The [`Nothing`] sentinel.
    Nothing,
    /// An untyped outcome.
    Void,
    /// A typed outcome with its declared value type.
    Typed {
        type_id: TypeId,
        type_name: &'static str,
    },
}

impl Shape {
    fn of<T: 'static>() -> Self {
        Self::Typed {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
        }
    }
}

/// Type-erased read access to an outcome.
pub trait Inspect {
    fn has_value(&self) -> bool;

    /// The whole log.
    fn item_refs(&self) -> &Items;

    fn shape(&self) -> Shape;

    /// The value, if present.
    fn value_any(&self) -> Option<&dyn Any>;

    /// The value's rendering hooks, if present.
    fn value_repr(&self) -> Option<&dyn ValueRepr>;

    /// Canonical rendering, identical to `Display`.
    fn render(&self) -> String;

    /// Structural equality with another outcome of any shape.
    fn eq_dyn(&self, other: &dyn Inspect) -> bool;

    fn has_errors(&self) -> bool {
        self.item_refs().has_errors()
    }
}

impl Inspect for Nothing {
    fn has_value(&self) -> bool {
        false
    }

    fn item_refs(&self) -> &Items {
        &NO_ITEMS
    }

    fn shape(&self) -> Shape {
        Shape::Nothing
    }

    fn value_any(&self) -> Option<&dyn Any> {
        None
    }

    fn value_repr(&self) -> Option<&dyn ValueRepr> {
        None
    }

    fn render(&self) -> String {
        self.to_string()
    }

    fn eq_dyn(&self, other: &dyn Inspect) -> bool {
        other.shape() == Shape::Nothing
    }
}

impl Inspect for Void {
    fn has_value(&self) -> bool {
        false
    }

    fn item_refs(&self) -> &Items {
        self.items()
    }

    fn shape(&self) -> Shape {
        Shape::Void
    }

    fn value_any(&self) -> Option<&dyn Any> {
        None
    }

    fn value_repr(&self) -> Option<&dyn ValueRepr> {
        None
    }

    fn render(&self) -> String {
        self.to_string()
    }

    fn eq_dyn(&self, other: &dyn Inspect) -> bool {
        other.shape() == Shape::Void && self.items() == other.item_refs()
    }
}

impl<T> Inspect for Outcome<T>
where
    T: PartialEq + ValueRepr + 'static,
{
    fn has_value(&self) -> bool {
        self.value.is_some()
    }

    fn item_refs(&self) -> &Items {
        self.items()
    }

    fn shape(&self) -> Shape {
        Shape::of::<T>()
    }

    fn value_any(&self) -> Option<&dyn Any> {
        self.value.as_ref().map(|value| value as &dyn Any)
    }

    fn value_repr(&self) -> Option<&dyn ValueRepr> {
        self.value.as_ref().map(|value| value as &dyn ValueRepr)
    }

    fn render(&self) -> String {
        self.to_string()
    }

    fn eq_dyn(&self, other: &dyn Inspect) -> bool {
        let Shape::Typed { type_id, .. } = other.shape() else {
            return false;
        };
        let same_type = type_id == TypeId::of::<T>();
        let values_match = match (&self.value, other.value_any(), other.value_repr()) {
            (None, None, _) => same_type,
            (Some(own), Some(theirs), _) if same_type => theirs.downcast_ref::<T>() == Some(own),
            (Some(own), Some(_), Some(theirs)) => foreign_values_match(own, theirs),
            _ => false,
        };
        values_match && self.items() == other.item_refs()
    }
}

/// Equality of two present values whose declared types differ.
fn foreign_values_match(own: &dyn ValueRepr, theirs: &dyn ValueRepr) -> bool {
    if own.is_null() || theirs.is_null() {
        return own.is_null() && theirs.is_null();
    }
    matches!((own.as_text(), theirs.as_text()), (Some(a), Some(b)) if a == b)
}
