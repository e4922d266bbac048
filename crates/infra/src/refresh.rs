//! Interval-driven dashboard summary refresher.
//!
//! The usage dashboard does not observe the log directly; it polls. The
//! refresher owns that timer: every tick it re-reads the full event list
//! and recomputes the [`EventSummary`] into a shared slot. When the log
//! is still empty it substitutes a built-in demo event set so the
//! dashboard has something to render, flagging the snapshot as demo mode.
//!
//! Teardown is cooperative: [`stop`](SummaryRefresher::stop) wakes the
//! worker, which finishes its current tick and exits; there is no
//! in-flight work to abort.

use std::sync::{Arc, Condvar, Mutex, PoisonError, RwLock};
use std::thread::JoinHandle;
use std::time::Duration;

use storelens_core::{EventLog, EventSummary};
use storelens_domain::AnalyticsEvent;
use tracing::debug;

/// The refresher's latest output: the recomputed summary plus whether it
/// was built from demo data.
#[derive(Debug, Clone, Default)]
pub struct SummarySnapshot {
    /// Aggregates recomputed from the raw event list.
    pub summary: EventSummary,
    /// `true` when the log was empty and demo events were used instead.
    pub demo_mode: bool,
}

/// Stop flag the worker thread can sleep against.
struct StopSignal {
    stopped: Mutex<bool>,
    cv: Condvar,
}

impl StopSignal {
    fn new() -> Self {
        Self { stopped: Mutex::new(false), cv: Condvar::new() }
    }

    /// Sleeps up to `timeout`, returning `true` once stopped.
    fn wait_for_stop(&self, timeout: Duration) -> bool {
        let guard = self.stopped.lock().unwrap_or_else(PoisonError::into_inner);
        if *guard {
            return true;
        }
        let (guard, _) =
            self.cv.wait_timeout(guard, timeout).unwrap_or_else(PoisonError::into_inner);
        *guard
    }

    fn stop(&self) {
        let mut guard = self.stopped.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = true;
        self.cv.notify_all();
    }
}

/// Recurring timer that keeps a dashboard-ready [`SummarySnapshot`]
/// up to date from a shared [`EventLog`].
pub struct SummaryRefresher {
    latest: Arc<RwLock<SummarySnapshot>>,
    signal: Arc<StopSignal>,
    handle: Option<JoinHandle<()>>,
}

impl SummaryRefresher {
    /// Default polling interval.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

    /// Computes an initial snapshot immediately, then starts the polling
    /// worker on `interval`.
    #[must_use]
    pub fn start(log: Arc<EventLog>, interval: Duration) -> Self {
        let latest = Arc::new(RwLock::new(recompute(&log)));
        let signal = Arc::new(StopSignal::new());

        let worker_latest = Arc::clone(&latest);
        let worker_signal = Arc::clone(&signal);
        let handle = std::thread::spawn(move || {
            while !worker_signal.wait_for_stop(interval) {
                let snapshot = recompute(&log);
                debug!(
                    total_events = snapshot.summary.total_events,
                    demo_mode = snapshot.demo_mode,
                    "refreshed analytics summary"
                );
                *worker_latest.write().unwrap_or_else(PoisonError::into_inner) = snapshot;
            }
        });

        Self { latest, signal, handle: Some(handle) }
    }

    /// The most recently computed snapshot.
    #[must_use]
    pub fn snapshot(&self) -> SummarySnapshot {
        self.latest.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Stops the timer and waits for the worker to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.signal.stop();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for SummaryRefresher {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn recompute(log: &EventLog) -> SummarySnapshot {
    let events = log.events();
    if events.is_empty() {
        SummarySnapshot { summary: EventSummary::from_events(&demo_events()), demo_mode: true }
    } else {
        SummarySnapshot { summary: EventSummary::from_events(&events), demo_mode: false }
    }
}

/// The demo event set shown before any real interaction happens.
#[must_use]
pub fn demo_events() -> Vec<AnalyticsEvent> {
    vec![
        AnalyticsEvent::new("page_view", "navigation", "view_page").with_label("index"),
        AnalyticsEvent::new("product_view", "product", "view_product")
            .with_label("coca-cola-600ml"),
        AnalyticsEvent::new("product_compare", "product", "compare_products")
            .with_label("2 items"),
        AnalyticsEvent::new("store_view", "store", "view_stores"),
        AnalyticsEvent::new("filter_change", "ui", "change_filter").with_label("category"),
        AnalyticsEvent::new("product_view", "product", "view_product").with_label("pan-blanco"),
        AnalyticsEvent::new("page_view", "navigation", "view_page").with_label("stores"),
    ]
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use storelens_core::EventLog;

    use super::{demo_events, SummaryRefresher};

    #[test]
    fn initial_snapshot_of_an_empty_log_is_demo_mode() {
        let log = Arc::new(EventLog::new());
        let refresher = SummaryRefresher::start(log, Duration::from_secs(60));

        let snapshot = refresher.snapshot();
        assert!(snapshot.demo_mode);
        assert_eq!(snapshot.summary.total_events, demo_events().len());

        refresher.stop();
    }

    #[test]
    fn stop_returns_promptly_even_with_a_long_interval() {
        let log = Arc::new(EventLog::new());
        let refresher = SummaryRefresher::start(log, Duration::from_secs(3600));

        let started = std::time::Instant::now();
        refresher.stop();
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn real_events_replace_demo_data_on_the_next_tick() {
        let log = Arc::new(EventLog::new());
        log.track_page_view("index");

        let refresher = SummaryRefresher::start(Arc::clone(&log), Duration::from_millis(10));

        let snapshot = refresher.snapshot();
        assert!(!snapshot.demo_mode);
        assert_eq!(snapshot.summary.total_events, 1);

        log.track_store_view("Centro");
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        loop {
            if refresher.snapshot().summary.total_events == 2 {
                break;
            }
            assert!(std::time::Instant::now() < deadline, "refresher never picked up the event");
            std::thread::sleep(Duration::from_millis(5));
        }

        refresher.stop();
    }
}
