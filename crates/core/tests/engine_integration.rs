//! Integration tests for `storelens_core`.
//!
//! These tests drive the sales catalog, the price simulation, and the
//! bounded event log together the way the dashboard does: query, simulate,
//! track, then summarize.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use storelens_core::{simulate_price_change, EventLog, EventSink, EventSummary, SalesCatalog};
use storelens_domain::{AnalyticsEvent, Result, Sale, DEFAULT_DEMAND_ELASTICITY};

fn dataset() -> Vec<Sale> {
    let mk = |id: &str, name: &str, category: &str, store: &str, units, tickets, revenue, margin| Sale {
        identifier: id.into(),
        name: name.into(),
        category: category.into(),
        store: store.into(),
        units_sold: units,
        ticket_count: tickets,
        revenue,
        margin,
    };
    vec![
        mk("coca-cola-600ml", "Coca Cola 600ml", "Bebidas", "Centro", 100, 80, 1000.0, 0.30),
        mk("pan-blanco", "Pan Blanco", "Panadería", "Norte", 40, 35, 800.0, 0.25),
        mk("leche-entera", "Leche Entera", "Lácteos", "Centro", 60, 50, 600.0, 0.20),
        mk("cerveza-lata", "Cerveza Lata", "Bebidas", "Sur", 90, 70, 1200.0, 0.35),
        mk("queso-manchego", "Queso Manchego", "Lácteos", "Norte", 25, 22, 500.0, 0.40),
    ]
}

/// Sink that records the latest mirrored snapshot.
#[derive(Default)]
struct LatestSnapshotSink {
    latest: Mutex<Vec<AnalyticsEvent>>,
}

impl EventSink for LatestSnapshotSink {
    fn save(&self, events: &[AnalyticsEvent]) -> Result<()> {
        *self.latest.lock().unwrap() = events.to_vec();
        Ok(())
    }
}

/// Validates that store rollups partition the dataset: per-store sums add
/// up to the global product stats for every aggregated field.
#[test]
fn store_rollups_partition_the_dataset() {
    let catalog = SalesCatalog::new(dataset());
    let stores = catalog.store_stats();
    let global = catalog.product_stats();

    assert_eq!(stores.iter().map(|s| s.product_count).sum::<usize>(), catalog.len());
    assert_eq!(
        stores.iter().map(|s| s.total_units_sold).sum::<u64>(),
        global.total_units_sold
    );
    assert_eq!(stores.iter().map(|s| s.total_tickets).sum::<u64>(), global.total_tickets);
    let revenue: f64 = stores.iter().map(|s| s.total_revenue).sum();
    assert!((revenue - global.total_revenue).abs() < 1e-9);

    for pair in stores.windows(2) {
        assert!(pair[0].total_revenue >= pair[1].total_revenue);
    }
}

/// Validates the lookup round-trip: every record is reachable by its own
/// identifier, and a comparison set comes back in dataset order.
#[test]
fn lookups_round_trip_through_identifiers() {
    let catalog = SalesCatalog::new(dataset());

    for sale in catalog.all() {
        let found = catalog.by_key(&sale.identifier).unwrap();
        assert_eq!(found, sale);
    }
    assert!(catalog.by_key("nonexistent").is_none());

    let keys: HashSet<String> =
        ["queso-manchego", "coca-cola-600ml"].iter().map(|s| s.to_string()).collect();
    let compared = catalog.by_keys(&keys);
    assert_eq!(compared[0].identifier, "coca-cola-600ml");
    assert_eq!(compared[1].identifier, "queso-manchego");
}

/// Drives the full what-if flow: look a product up, simulate a price
/// change, and track the run; the mirrored sink sees the tracked event.
#[test]
fn simulation_flow_tracks_and_mirrors_events() {
    let catalog = SalesCatalog::new(dataset());
    let sink = Arc::new(LatestSnapshotSink::default());
    let log = EventLog::new().with_sink(sink.clone());

    let sale = catalog.by_key("coca-cola-600ml").unwrap();
    let result = simulate_price_change(sale, 10.0, DEFAULT_DEMAND_ELASTICITY);
    assert_eq!(result.new_units_sold, 88);
    assert_eq!(result.new_revenue, 968.0);

    log.track_product_view(&sale.identifier, &sale.name);
    log.track_simulation(&sale.identifier, 10.0, DEFAULT_DEMAND_ELASTICITY);

    let mirrored = sink.latest.lock().unwrap();
    assert_eq!(mirrored.len(), 2);
    assert_eq!(mirrored[1].event, "price_simulation");
    assert_eq!(mirrored[1].value, Some(10.0));
}

/// Validates the capacity contract end-to-end: sixty appends leave
/// exactly the last fifty events, in original order, and the summary is
/// computed over that retained window only.
#[test]
fn capacity_bounds_feed_the_summary() {
    let log = EventLog::new();
    for n in 1..=60 {
        log.track_page_view(&format!("page-{n}"));
    }

    let events = log.events();
    assert_eq!(events.len(), 50);
    assert_eq!(events[0].label.as_deref(), Some("page-11"));
    assert_eq!(events[49].label.as_deref(), Some("page-60"));

    let summary = EventSummary::from_events(&events);
    assert_eq!(summary.total_events, 50);
    assert_eq!(summary.events_by_action[0], ("view_page".to_string(), 50));
    assert_eq!(summary.recent[0].label.as_deref(), Some("page-60"));
}

/// Validates that category filtering matches the summary's counters over
/// a mixed session.
#[test]
fn category_filter_agrees_with_summary_counters() {
    let log = EventLog::new();
    log.track_page_view("index");
    log.track_product_view("pan-blanco", "Pan Blanco");
    log.track_product_compare(&["pan-blanco".into(), "leche-entera".into()]);
    log.track_simulation("pan-blanco", -5.0, DEFAULT_DEMAND_ELASTICITY);
    log.track_store_view("Norte");
    log.track_theme_change("dark");

    let product = log.events_by_category("product");
    assert_eq!(product.len(), 2);

    let summary = EventSummary::from_events(&log.events());
    assert_eq!(summary.simulation_count, 1);
    assert_eq!(summary.compare_count, 1);
    assert_eq!(summary.unique_products_viewed(), 1);
    assert_eq!(summary.top_products(5)[0].0, "Pan Blanco");
}
