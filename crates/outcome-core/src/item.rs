//! Diagnostic items: the entries of an outcome's log.
//!
//! An item is any immutable value implementing [`Item`]. The outcome algebra
//! treats items as opaque: it stores them, filters them by their concrete
//! type, counts them and compares them using the item's own `Eq`/`Hash`.
//!
//! Items may optionally expose [`ItemInfo`] (an error flag plus a message),
//! which is what [`crate::Items::has_errors`] looks at.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ITEM CONTRACT
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Error flag and message exposed by items that carry them.
pub trait ItemInfo {
    /// Whether this item describes an error.
    fn is_error(&self) -> bool;

    /// Human-readable message of this item.
    fn message(&self) -> &str;
}

/// A diagnostic entry that can be placed in an outcome's log.
///
/// The `Display` form is what the outcome formatter prints for the item.
/// To be stored in a log an item must also be `Eq + Hash`.
pub trait Item: Any + fmt::Debug + fmt::Display + Send + Sync {
    /// Returns the error/message capability, if this item has one.
    fn info(&self) -> Option<&dyn ItemInfo> {
        None
    }
}

/// Object-safe view over an item with its equality and hashing erased.
trait ErasedItem: Send + Sync {
    fn as_item(&self) -> &dyn Item;
    fn as_any(&self) -> &dyn Any;
    fn type_name(&self) -> &'static str;
    fn eq_erased(&self, other: &dyn ErasedItem) -> bool;
    fn hash_erased(&self, state: &mut dyn Hasher);
}

impl<I> ErasedItem for I
where
    I: Item + Eq + Hash,
{
    fn as_item(&self) -> &dyn Item {
        self
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<I>()
    }

    fn eq_erased(&self, other: &dyn ErasedItem) -> bool {
        other
            .as_any()
            .downcast_ref::<I>()
            .is_some_and(|other| self == other)
    }

    fn hash_erased(&self, mut state: &mut dyn Hasher) {
        TypeId::of::<I>().hash(&mut state);
        self.hash(&mut state);
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// SHARED ITEM HANDLE
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Shared, type-erased handle to an item stored in a log.
///
/// Cloning is cheap. Equality and hashing delegate to the wrapped item; two
/// handles to items of different concrete types are never equal.
#[derive(Clone)]
pub struct ItemRef(Arc<dyn ErasedItem>);

impl ItemRef {
    /// Wrap an item in a shared handle.
    pub fn new<I>(item: I) -> Self
    where
        I: Item + Eq + Hash,
    {
        Self(Arc::new(item))
    }

    /// Borrow the item as a trait object.
    pub fn as_item(&self) -> &dyn Item {
        self.0.as_item()
    }

    /// Borrow the item as `K` if that is its concrete type.
    pub fn downcast_ref<K: Item>(&self) -> Option<&K> {
        self.0.as_any().downcast_ref::<K>()
    }

    /// Whether the concrete type of the item is exactly `K`.
    pub fn is<K: Item>(&self) -> bool {
        self.0.as_any().is::<K>()
    }

    /// Fully qualified name of the item's concrete type.
    pub fn type_name(&self) -> &'static str {
        self.0.type_name()
    }

    pub fn info(&self) -> Option<&dyn ItemInfo> {
        self.as_item().info()
    }

    /// Whether the item has info and that info reports an error.
    pub fn is_error(&self) -> bool {
        self.info().is_some_and(ItemInfo::is_error)
    }
}

impl PartialEq for ItemRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.eq_erased(other.0.as_ref())
    }
}

impl Eq for ItemRef {}

impl Hash for ItemRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash_erased(state);
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_item(), f)
    }
}

impl fmt::Debug for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_item(), f)
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// STOCK DIAGNOSTIC
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Severity of a [`Diagnostic`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Severity {
    /// The operation failed or produced an unusable value.
    Error,
    /// Something should be looked at but did not fail the operation.
    Warning,
    /// Contextual information only.
    Info,
}

/// General-purpose diagnostic item with a severity and a message.
///
/// Renders as its message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    /// Create a diagnostic with the given severity.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    /// Create an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Create an informational diagnostic.
    pub fn informational(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl ItemInfo for Diagnostic {
    fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    fn message(&self) -> &str {
        &self.message
    }
}

impl Item for Diagnostic {
    fn info(&self) -> Option<&dyn ItemInfo> {
        Some(self)
    }
}
