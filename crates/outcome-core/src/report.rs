//! Structured snapshots of outcomes and forwarding of diagnostics to `tracing`.
//!
//! The outcome algebra never logs on its own. A caller that wants its
//! diagnostics surfaced either serializes a [`Report`] or calls [`emit`].

use serde::{Deserialize, Serialize};

use crate::inspect::Inspect;
use crate::item::{Diagnostic, ItemRef, Severity};
use crate::outcome::Outcome;
use crate::void::Void;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// SNAPSHOT
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One entry of a [`Report`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemReport {
    pub type_name: String,
    pub display: String,
    pub is_error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<&ItemRef> for ItemReport {
    fn from(item: &ItemRef) -> Self {
        Self {
            type_name: item.type_name().to_string(),
            display: item.to_string(),
            is_error: item.is_error(),
            message: item.info().map(|info| info.message().to_string()),
        }
    }
}

/// Serializable snapshot of an outcome, borrowing its value.
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a, V = ()> {
    pub has_value: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<&'a V>,
    pub rendering: String,
    pub items: Vec<ItemReport>,
}

impl<'a, V> Report<'a, V>
where
    V: Serialize,
{
    /// Snapshot of a typed outcome.
    pub fn of(outcome: &'a Outcome<V>) -> Self
    where
        Outcome<V>: Inspect,
    {
        Self {
            has_value: outcome.has_value(),
            value: outcome.as_option(),
            rendering: outcome.render(),
            items: outcome.items().iter().map(ItemReport::from).collect(),
        }
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Report<'_> {
    /// Snapshot of an untyped outcome.
    pub fn of_void(outcome: &Void) -> Self {
        Self {
            has_value: false,
            value: None,
            rendering: outcome.to_string(),
            items: outcome.items().iter().map(ItemReport::from).collect(),
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TRACING
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Log every item of `outcome` as a `tracing` event, in log order.
///
/// Errors go to `ERROR`, warning diagnostics to `WARN`, other items with info
/// to `INFO` and items without info to `DEBUG`.
pub fn emit(outcome: &dyn Inspect) {
    outcome.item_refs().iter().for_each(emit_item);
}

fn emit_item(item: &ItemRef) {
    let kind = item.type_name();
    match item.info() {
        Some(info) if info.is_error() => {
            tracing::error!(kind, diagnostic = info.message(), "outcome item");
        }
        Some(info) if is_warning(item) => {
            tracing::warn!(kind, diagnostic = info.message(), "outcome item");
        }
        Some(info) => tracing::info!(kind, diagnostic = info.message(), "outcome item"),
        None => tracing::debug!(kind, item = %item, "outcome item"),
    }
}

fn is_warning(item: &ItemRef) -> bool {
    item.downcast_ref::<Diagnostic>()
        .is_some_and(|d| d.severity == Severity::Warning)
}
