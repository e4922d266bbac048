//! Immutable sales catalog with per-store and global rollups.

use std::collections::{HashMap, HashSet};

use storelens_domain::{ProductStats, Sale, StoreStats};

/// Running totals for one store while grouping.
#[derive(Default)]
struct StoreAccum {
    units_sold: u64,
    tickets: u64,
    revenue: f64,
    weighted_margin: f64,
    product_count: usize,
}

impl StoreAccum {
    fn add(&mut self, sale: &Sale) {
        self.units_sold += sale.units_sold;
        self.tickets += sale.ticket_count;
        self.revenue += sale.revenue;
        self.weighted_margin += sale.margin * sale.revenue;
        self.product_count += 1;
    }

    /// `0.0` sentinels stand in for the undefined averages of an empty
    /// denominator rather than letting a non-finite value escape.
    fn into_stats(self, store: String) -> StoreStats {
        let avg_ticket =
            if self.tickets == 0 { 0.0 } else { self.revenue / self.tickets as f64 };
        let avg_margin =
            if self.revenue == 0.0 { 0.0 } else { self.weighted_margin / self.revenue };
        StoreStats {
            store,
            total_units_sold: self.units_sold,
            total_tickets: self.tickets,
            total_revenue: self.revenue,
            avg_ticket,
            avg_margin,
            product_count: self.product_count,
        }
    }
}

/// The static sales dataset plus every query the dashboard renders from.
///
/// Constructed once from pre-parsed, pre-validated records; the catalog
/// itself never mutates and performs no validation.
#[derive(Debug, Clone)]
pub struct SalesCatalog {
    sales: Vec<Sale>,
}

impl SalesCatalog {
    /// Wraps the pre-parsed dataset, preserving its order.
    #[must_use]
    pub fn new(sales: Vec<Sale>) -> Self {
        Self { sales }
    }

    /// The complete dataset in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Sale] {
        &self.sales
    }

    /// Number of sale records in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sales.len()
    }

    /// Returns `true` when the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }

    /// First record whose identifier equals `key`, if any.
    #[must_use]
    pub fn by_key(&self, key: &str) -> Option<&Sale> {
        self.sales.iter().find(|sale| sale.identifier == key)
    }

    /// Records whose identifier is in `keys`, in dataset order.
    ///
    /// Unmatched keys are silently omitted; the result order is the
    /// dataset's, not the caller's.
    #[must_use]
    pub fn by_keys(&self, keys: &HashSet<String>) -> Vec<&Sale> {
        self.sales.iter().filter(|sale| keys.contains(&sale.identifier)).collect()
    }

    /// Per-store rollups, sorted descending by total revenue.
    ///
    /// Grouping preserves the order in which stores first appear, and the
    /// sort is stable, so equal-revenue stores keep that relative order.
    #[must_use]
    pub fn store_stats(&self) -> Vec<StoreStats> {
        let mut order: Vec<String> = Vec::new();
        let mut groups: HashMap<String, StoreAccum> = HashMap::new();

        for sale in &self.sales {
            if !groups.contains_key(&sale.store) {
                order.push(sale.store.clone());
            }
            groups.entry(sale.store.clone()).or_default().add(sale);
        }

        let mut stats: Vec<StoreStats> = order
            .into_iter()
            .filter_map(|store| {
                groups.remove(&store).map(|accum| accum.into_stats(store))
            })
            .collect();

        stats.sort_by(|a, b| b.total_revenue.total_cmp(&a.total_revenue));
        stats
    }

    /// Grand-total rollup over the whole dataset.
    #[must_use]
    pub fn product_stats(&self) -> ProductStats {
        let mut accum = StoreAccum::default();
        for sale in &self.sales {
            accum.add(sale);
        }
        let avg_margin =
            if accum.revenue == 0.0 { 0.0 } else { accum.weighted_margin / accum.revenue };
        ProductStats {
            total_products: accum.product_count,
            total_units_sold: accum.units_sold,
            total_tickets: accum.tickets,
            total_revenue: accum.revenue,
            avg_margin,
        }
    }

    /// Distinct categories, in order of first occurrence.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        Self::distinct(self.sales.iter().map(|sale| sale.category.as_str()))
    }

    /// Distinct stores, in order of first occurrence.
    #[must_use]
    pub fn stores(&self) -> Vec<String> {
        Self::distinct(self.sales.iter().map(|sale| sale.store.as_str()))
    }

    fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for value in values {
            if seen.insert(value) {
                out.push(value.to_owned());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use storelens_domain::Sale;

    use super::SalesCatalog;

    fn sale(id: &str, category: &str, store: &str, units: u64, tickets: u64, revenue: f64, margin: f64) -> Sale {
        Sale {
            identifier: id.into(),
            name: id.to_uppercase(),
            category: category.into(),
            store: store.into(),
            units_sold: units,
            ticket_count: tickets,
            revenue,
            margin,
        }
    }

    fn catalog() -> SalesCatalog {
        SalesCatalog::new(vec![
            sale("coca-cola-600ml", "Bebidas", "Centro", 100, 80, 1000.0, 0.30),
            sale("pan-blanco", "Panadería", "Norte", 40, 35, 800.0, 0.25),
            sale("leche-entera", "Lácteos", "Centro", 60, 50, 600.0, 0.20),
            sale("cerveza-lata", "Bebidas", "Sur", 90, 70, 1200.0, 0.35),
        ])
    }

    #[test]
    fn all_preserves_dataset_order() {
        let catalog = catalog();
        let ids: Vec<_> = catalog.all().iter().map(|s| s.identifier.as_str()).collect();
        assert_eq!(ids, vec!["coca-cola-600ml", "pan-blanco", "leche-entera", "cerveza-lata"]);
    }

    #[test]
    fn by_key_finds_existing_record() {
        let catalog = catalog();
        let found = catalog.by_key("pan-blanco").unwrap();
        assert_eq!(found.store, "Norte");
    }

    #[test]
    fn by_key_is_absent_for_unknown_identifier() {
        assert!(catalog().by_key("nonexistent").is_none());
    }

    #[test]
    fn by_keys_returns_dataset_order_and_omits_unmatched() {
        let catalog = catalog();
        let keys: HashSet<String> = ["cerveza-lata", "coca-cola-600ml", "nope"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let ids: Vec<_> =
            catalog.by_keys(&keys).iter().map(|s| s.identifier.as_str()).collect();
        assert_eq!(ids, vec!["coca-cola-600ml", "cerveza-lata"]);
    }

    #[test]
    fn store_stats_sorts_descending_by_revenue() {
        let stats = catalog().store_stats();
        let stores: Vec<_> = stats.iter().map(|s| s.store.as_str()).collect();
        assert_eq!(stores, vec!["Centro", "Sur", "Norte"]);

        for pair in stats.windows(2) {
            assert!(pair[0].total_revenue >= pair[1].total_revenue);
        }
    }

    #[test]
    fn store_stats_aggregates_match_per_store_sums() {
        let stats = catalog().store_stats();
        let centro = stats.iter().find(|s| s.store == "Centro").unwrap();

        assert_eq!(centro.total_units_sold, 160);
        assert_eq!(centro.total_tickets, 130);
        assert_eq!(centro.total_revenue, 1600.0);
        assert_eq!(centro.product_count, 2);
        assert!((centro.avg_ticket - 1600.0 / 130.0).abs() < 1e-9);
    }

    #[test]
    fn avg_margin_is_revenue_weighted_not_a_simple_mean() {
        let catalog = SalesCatalog::new(vec![
            sale("a", "x", "Solo", 10, 10, 100.0, 0.2),
            sale("b", "x", "Solo", 10, 10, 300.0, 0.4),
        ]);
        let stats = catalog.store_stats();
        assert!((stats[0].avg_margin - 0.35).abs() < 1e-9);
    }

    #[test]
    fn grouping_is_complete_against_global_stats() {
        let catalog = catalog();
        let stores = catalog.store_stats();
        let global = catalog.product_stats();

        let product_count: usize = stores.iter().map(|s| s.product_count).sum();
        let revenue: f64 = stores.iter().map(|s| s.total_revenue).sum();
        let units: u64 = stores.iter().map(|s| s.total_units_sold).sum();
        let tickets: u64 = stores.iter().map(|s| s.total_tickets).sum();

        assert_eq!(product_count, catalog.len());
        assert_eq!(units, global.total_units_sold);
        assert_eq!(tickets, global.total_tickets);
        assert!((revenue - global.total_revenue).abs() < 1e-9);
    }

    #[test]
    fn empty_catalog_yields_empty_and_zeroed_results() {
        let catalog = SalesCatalog::new(Vec::new());

        assert!(catalog.store_stats().is_empty());
        assert!(catalog.categories().is_empty());

        let global = catalog.product_stats();
        assert_eq!(global.total_products, 0);
        assert_eq!(global.avg_margin, 0.0);
    }

    #[test]
    fn zero_ticket_store_reports_zero_avg_ticket() {
        let catalog = SalesCatalog::new(vec![sale("gratis", "x", "Solo", 10, 0, 0.0, 0.5)]);
        let stats = catalog.store_stats();

        assert_eq!(stats[0].avg_ticket, 0.0);
        assert_eq!(stats[0].avg_margin, 0.0);
    }

    #[test]
    fn categories_and_stores_keep_first_occurrence_order() {
        let catalog = catalog();
        assert_eq!(catalog.categories(), vec!["Bebidas", "Panadería", "Lácteos"]);
        assert_eq!(catalog.stores(), vec!["Centro", "Norte", "Sur"]);
    }
}
