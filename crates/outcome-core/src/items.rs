//! The ordered, append-only diagnostic log carried by every outcome.
//!
//! Key properties:
//! - Insertion order is preserved through every operation
//! - A log that was never materialized is indistinguishable from an empty one
//! - Uses `im` for structural sharing: derived outcomes share unchanged prefixes
//! - No mutation after construction

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use im::Vector;

use crate::item::{Item, ItemRef};

/// Immutable sequence of diagnostic items.
#[derive(Clone, Default)]
pub struct Items {
    log: Option<Vector<ItemRef>>,
}

impl Items {
    /// The empty log. Allocates nothing.
    pub const EMPTY: Self = Self { log: None };

    /// Number of items in the log.
    pub fn len(&self) -> usize {
        self.log.as_ref().map_or(0, Vector::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over every item in log order.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.log.as_ref().map(Vector::iter))
    }

    pub fn first(&self) -> Option<&ItemRef> {
        self.log.as_ref().and_then(Vector::front)
    }

    pub fn last(&self) -> Option<&ItemRef> {
        self.log.as_ref().and_then(Vector::back)
    }

    /// Items whose concrete type is exactly `K`, in log order.
    ///
    /// The iterator is lazy; call again to restart.
    pub fn of_type<K: Item>(&self) -> OfType<'_, K> {
        OfType {
            inner: self.iter(),
            _kind: PhantomData,
        }
    }

    /// Whether any item exposes info that reports an error.
    pub fn has_errors(&self) -> bool {
        self.iter().any(ItemRef::is_error)
    }

    /// Short diagnostic summary of the log.
    ///
    /// Empty for no items, the item itself for one item, otherwise the last
    /// item followed by the count of the remaining ones.
    pub fn summary(&self) -> String {
        match (self.len(), self.last()) {
            (0, _) | (_, None) => String::new(),
            (1, Some(only)) => only.to_string(),
            (count, Some(last)) => format!("{last} (and {} more items)", count - 1),
        }
    }

    /// New log with `item` appended.
    pub(crate) fn pushed(self, item: ItemRef) -> Self {
        let mut log = self.log.unwrap_or_default();
        log.push_back(item);
        Self { log: Some(log) }
    }

    /// New log holding the items of `self` followed by those of `other`.
    pub(crate) fn concat(self, other: Self) -> Self {
        match (self.log, other.log) {
            (left, None) => Self { log: left },
            (None, right) => Self { log: right },
            (Some(mut left), Some(right)) => {
                left.append(right);
                Self { log: Some(left) }
            }
        }
    }
}

impl PartialEq for Items {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && itertools::equal(self.iter(), other.iter())
    }
}

impl Eq for Items {}

impl Hash for Items {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        self.iter().for_each(|item| item.hash(state));
    }
}

impl fmt::Display for Items {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

impl fmt::Debug for Items {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl FromIterator<ItemRef> for Items {
    fn from_iter<I: IntoIterator<Item = ItemRef>>(iter: I) -> Self {
        let log: Vector<ItemRef> = iter.into_iter().collect();
        if log.is_empty() {
            Self::EMPTY
        } else {
            Self { log: Some(log) }
        }
    }
}

impl<'a> IntoIterator for &'a Items {
    type Item = &'a ItemRef;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ITERATORS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Iterator over all items of a log.
pub struct Iter<'a>(Option<im::vector::Iter<'a, ItemRef>>);

impl<'a> Iterator for Iter<'a> {
    type Item = &'a ItemRef;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.as_ref().map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.as_mut()?.next_back()
    }
}

/// Iterator over the items of one concrete type.
pub struct OfType<'a, K> {
    inner: Iter<'a>,
    _kind: PhantomData<fn() -> K>,
}

impl<'a, K: Item> Iterator for OfType<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find_map(ItemRef::downcast_ref::<K>)
    }
}
