//! Sales records and the statistics derived from them.
//!
//! `Sale` is the wire contract with the dataset source: the camelCase field
//! names are exactly what the pre-parsed JSON dataset carries. The derived
//! stats structs are recomputed on every query and never cached.

use serde::{Deserialize, Serialize};

/// One product-at-one-store observation for a reporting period.
///
/// `category` and `store` are open string sets: the dataset defines the
/// universe of values, not the code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    /// Unique record key.
    pub identifier: String,
    /// Display name.
    pub name: String,
    /// Product classification.
    pub category: String,
    /// Store (branch) the observation belongs to.
    pub store: String,
    /// Units sold during the period.
    pub units_sold: u64,
    /// Distinct transactions containing the product.
    pub ticket_count: u64,
    /// Revenue for the period, currency-agnostic.
    pub revenue: f64,
    /// Fractional profit margin, `(price - cost) / price`.
    ///
    /// Conceptually in `[0, 1]`; upstream data is not trusted to honor
    /// that, which is why the load boundary validates it.
    pub margin: f64,
}

impl Sale {
    /// Implied unit price, `revenue / units_sold`.
    ///
    /// Returns `None` when no units were sold, since no price can be
    /// inferred from an empty period.
    #[must_use]
    pub fn implied_price(&self) -> Option<f64> {
        if self.units_sold == 0 {
            None
        } else {
            Some(self.revenue / self.units_sold as f64)
        }
    }
}

/// Aggregates for one store, derived from every sale recorded against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreStats {
    /// Store name.
    pub store: String,
    /// Sum of units sold across the store's products.
    pub total_units_sold: u64,
    /// Sum of tickets across the store's products.
    pub total_tickets: u64,
    /// Sum of revenue across the store's products.
    pub total_revenue: f64,
    /// Average ticket value, `total_revenue / total_tickets`; `0.0` when
    /// the store has no tickets.
    pub avg_ticket: f64,
    /// Revenue-weighted average margin; `0.0` when the store has no
    /// revenue.
    pub avg_margin: f64,
    /// Number of distinct sale records grouped under this store.
    pub product_count: usize,
}

/// Grand-total aggregates collapsed over the whole dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductStats {
    /// Number of sale records in the dataset.
    pub total_products: usize,
    /// Sum of units sold.
    pub total_units_sold: u64,
    /// Sum of tickets.
    pub total_tickets: u64,
    /// Sum of revenue.
    pub total_revenue: f64,
    /// Revenue-weighted average margin; `0.0` when there is no revenue.
    pub avg_margin: f64,
}

/// Outcome of a price-change what-if simulation.
///
/// Percentage deltas are `None` when the corresponding baseline
/// denominator is zero, so a relative change is undefined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSimulation {
    /// Projected units sold, rounded to the nearest integer.
    pub new_units_sold: u64,
    /// Projected revenue, rounded to the nearest integer amount.
    pub new_revenue: f64,
    /// Projected margin, floored at zero.
    pub new_margin: f64,
    /// Relative revenue change in percent, from the unrounded projection.
    pub revenue_change_percent: Option<f64>,
    /// Relative margin change in percent.
    pub margin_change_percent: Option<f64>,
}
