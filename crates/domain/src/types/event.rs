//! Usage-analytics event shape.

use serde::{Deserialize, Serialize};

/// One usage-analytics event.
///
/// The canonical shape carries no timestamp and no identifier; events are
/// meaningful only by their position in the bounded log. `label` and
/// `value` are optional payloads whose meaning depends on the
/// `(event, category, action)` triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    /// Event kind, e.g. `page_view` or `price_simulation`.
    pub event: String,
    /// Coarse grouping, e.g. `navigation`, `product`, `simulation`.
    pub category: String,
    /// What the user did, e.g. `view_detail` or `compare_products`.
    pub action: String,
    /// Free-form detail for the event kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Numeric payload for the event kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl AnalyticsEvent {
    /// Builds an event from its triple, without optional payloads.
    #[must_use]
    pub fn new(
        event: impl Into<String>,
        category: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            event: event.into(),
            category: category.into(),
            action: action.into(),
            label: None,
            value: None,
        }
    }

    /// Sets the label payload.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the numeric payload.
    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }
}
