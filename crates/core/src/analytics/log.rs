//! The capacity-bounded event log.

use std::sync::{Arc, Mutex, PoisonError};

use storelens_common::collections::RingBuffer;
use storelens_domain::{AnalyticsEvent, EVENT_LOG_CAPACITY};
use tracing::{debug, warn};

use super::ports::EventSink;

/// Append-only, capacity-bounded sequence of usage events.
///
/// Holds at most [`EVENT_LOG_CAPACITY`] events, evicting the oldest on
/// overflow. After each append the full retained sequence is mirrored
/// best-effort to the configured [`EventSink`]; mirror failures are
/// logged and never surface to the tracking caller.
///
/// The log always starts empty. The persisted mirror is write-only from
/// the log's perspective: analytics are session-scoped, and a sink may
/// expose its own read-back for external consumers.
///
/// Appends take a single internal lock, so the log can be shared across
/// threads behind an `Arc` without further coordination; readers always
/// receive defensive copies.
pub struct EventLog {
    events: Mutex<RingBuffer<AnalyticsEvent>>,
    sink: Option<Arc<dyn EventSink>>,
}

impl EventLog {
    /// Creates an empty log with the default capacity and no sink.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(EVENT_LOG_CAPACITY)
    }

    /// Creates an empty log retaining at most `capacity` events.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { events: Mutex::new(RingBuffer::new(capacity)), sink: None }
    }

    /// Attaches a persistence sink that mirrors the retained sequence.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Appends one event, evicting the oldest on overflow, then mirrors
    /// the retained sequence to the sink.
    pub fn track(&self, event: AnalyticsEvent) {
        debug!(event = %event.event, action = %event.action, "tracking analytics event");

        let snapshot = {
            let mut events = self.lock();
            events.push(event);
            events.to_vec()
        };

        if let Some(sink) = &self.sink {
            if let Err(err) = sink.save(&snapshot) {
                warn!(error = %err, "failed to mirror analytics events to sink");
            }
        }
    }

    /// Records a page navigation.
    pub fn track_page_view(&self, page: &str) {
        self.track(AnalyticsEvent::new("page_view", "navigation", "view_page").with_label(page));
    }

    /// Records a product detail view. The label combines identifier and
    /// display name as `identifier:name`.
    pub fn track_product_view(&self, identifier: &str, name: &str) {
        self.track(
            AnalyticsEvent::new("product_view", "product", "view_detail")
                .with_label(format!("{identifier}:{name}")),
        );
    }

    /// Records a product comparison over the given identifiers.
    pub fn track_product_compare(&self, identifiers: &[String]) {
        self.track(
            AnalyticsEvent::new("product_compare", "product", "compare_products")
                .with_label(identifiers.join(","))
                .with_value(identifiers.len() as f64),
        );
    }

    /// Records a what-if price simulation run.
    pub fn track_simulation(&self, identifier: &str, price_change_percent: f64, elasticity: f64) {
        self.track(
            AnalyticsEvent::new("price_simulation", "simulation", "run_what_if")
                .with_label(format!(
                    "{identifier}:price_{price_change_percent}%:elasticity_{elasticity}"
                ))
                .with_value(price_change_percent),
        );
    }

    /// Records a theme switch.
    pub fn track_theme_change(&self, new_theme: &str) {
        self.track(AnalyticsEvent::new("theme_change", "ui", "change_theme").with_label(new_theme));
    }

    /// Records a store analytics view.
    pub fn track_store_view(&self, store: &str) {
        self.track(AnalyticsEvent::new("store_view", "store", "view_analytics").with_label(store));
    }

    /// Defensive copy of the retained sequence, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.lock().to_vec()
    }

    /// Retained events whose category equals `category`, order preserved.
    #[must_use]
    pub fn events_by_category(&self, category: &str) -> Vec<AnalyticsEvent> {
        self.lock().iter().filter(|event| event.category == category).cloned().collect()
    }

    /// Number of events currently retained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` when no events have been retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Maximum number of events the log retains.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    /// A poisoned lock only means another thread panicked mid-append;
    /// the buffer itself is still structurally sound, so recover it.
    fn lock(&self) -> std::sync::MutexGuard<'_, RingBuffer<AnalyticsEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}
