//! Display aggregates recomputed from the raw event list.
//!
//! The dashboard reader polls the log and rebuilds this summary on every
//! tick; nothing here is incremental or cached.

use serde::Serialize;
use storelens_domain::AnalyticsEvent;

/// Number of trailing events exposed as "recent activity".
const RECENT_EVENTS: usize = 10;

/// Aggregates the usage dashboard renders from the raw event list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventSummary {
    /// Total number of events observed.
    pub total_events: usize,
    /// Event counts keyed by action, in order of first occurrence.
    pub events_by_action: Vec<(String, u64)>,
    /// Product-view counts keyed by product name, most viewed first.
    pub product_views: Vec<(String, u64)>,
    /// Events in the `simulation` category.
    pub simulation_count: usize,
    /// Events whose action is `compare_products`.
    pub compare_count: usize,
    /// The trailing events, newest first.
    pub recent: Vec<AnalyticsEvent>,
}

impl EventSummary {
    /// Recomputes every aggregate from the raw event list.
    #[must_use]
    pub fn from_events(events: &[AnalyticsEvent]) -> Self {
        let mut by_action: Vec<(String, u64)> = Vec::new();
        for event in events {
            match by_action.iter_mut().find(|(action, _)| *action == event.action) {
                Some((_, count)) => *count += 1,
                None => by_action.push((event.action.clone(), 1)),
            }
        }

        let mut product_views: Vec<(String, u64)> = Vec::new();
        for event in events {
            if event.category != "product" || event.action != "view_detail" {
                continue;
            }
            let Some(label) = &event.label else { continue };
            let name = product_name(label);
            match product_views.iter_mut().find(|(n, _)| n.as_str() == name) {
                Some((_, count)) => *count += 1,
                None => product_views.push((name.to_owned(), 1)),
            }
        }
        // Stable sort keeps first-seen order among equal counts.
        product_views.sort_by(|a, b| b.1.cmp(&a.1));

        let simulation_count = events.iter().filter(|e| e.category == "simulation").count();
        let compare_count = events.iter().filter(|e| e.action == "compare_products").count();

        let recent: Vec<AnalyticsEvent> =
            events.iter().rev().take(RECENT_EVENTS).cloned().collect();

        Self {
            total_events: events.len(),
            events_by_action: by_action,
            product_views,
            simulation_count,
            compare_count,
            recent,
        }
    }

    /// Number of distinct products viewed.
    #[must_use]
    pub fn unique_products_viewed(&self) -> usize {
        self.product_views.len()
    }

    /// The `n` most viewed products with their view counts.
    #[must_use]
    pub fn top_products(&self, n: usize) -> &[(String, u64)] {
        &self.product_views[..self.product_views.len().min(n)]
    }
}

/// Product-view labels are `identifier:name` composites; the display name
/// is the part after the first colon. Labels without a colon are used
/// verbatim.
fn product_name(label: &str) -> &str {
    match label.split_once(':') {
        Some((_, name)) => name,
        None => label,
    }
}
