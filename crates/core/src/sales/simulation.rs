//! Constant-elasticity price-change simulation.
//!
//! The model derives an implied unit price from the sale's revenue and
//! units, applies the requested price change, and responds with a demand
//! shift of `elasticity × price_change`. Cost per unit is held constant,
//! so the margin moves with the price alone.

use storelens_domain::{PriceSimulation, Sale};

/// Projects the effect of changing a product's price by
/// `price_change_percent`, given a price elasticity of demand.
///
/// `demand_elasticity` is negative for normal goods
/// ([`DEFAULT_DEMAND_ELASTICITY`](storelens_domain::DEFAULT_DEMAND_ELASTICITY)
/// is the usual choice): a price increase then lowers the projected units
/// sold, flooring at zero.
///
/// The returned units and revenue are rounded to the nearest integer;
/// `revenue_change_percent` is computed from the unrounded projection so
/// the reported delta is not distorted by the display rounding.
///
/// Degenerate baselines are handled explicitly instead of propagating
/// non-finite numbers:
/// - `units_sold == 0` or `revenue <= 0`: no unit price can be implied,
///   so the result is all-zero with both percentage deltas absent.
/// - the new price is zero or negative (a -100% change): `new_margin` is
///   reported as `0.0`.
/// - `margin == 0`: the projection runs normally but
///   `margin_change_percent` is absent, a relative change from a zero
///   base being undefined.
#[must_use]
pub fn simulate_price_change(
    sale: &Sale,
    price_change_percent: f64,
    demand_elasticity: f64,
) -> PriceSimulation {
    let Some(price) = sale.implied_price() else {
        return degenerate();
    };
    if sale.revenue <= 0.0 {
        return degenerate();
    }

    let new_price = price * (1.0 + price_change_percent / 100.0);

    let demand_change = demand_elasticity * (price_change_percent / 100.0);
    let new_units = (sale.units_sold as f64 * (1.0 + demand_change)).max(0.0);

    let new_revenue = new_units * new_price;

    let cost_per_unit = price * (1.0 - sale.margin);
    let new_margin = if new_price > 0.0 {
        ((new_price - cost_per_unit) / new_price).max(0.0)
    } else {
        0.0
    };

    let revenue_change_percent = Some((new_revenue - sale.revenue) / sale.revenue * 100.0);
    let margin_change_percent = if sale.margin == 0.0 {
        None
    } else {
        Some((new_margin - sale.margin) / sale.margin * 100.0)
    };

    PriceSimulation {
        new_units_sold: new_units.round() as u64,
        new_revenue: new_revenue.round(),
        new_margin,
        revenue_change_percent,
        margin_change_percent,
    }
}

fn degenerate() -> PriceSimulation {
    PriceSimulation {
        new_units_sold: 0,
        new_revenue: 0.0,
        new_margin: 0.0,
        revenue_change_percent: None,
        margin_change_percent: None,
    }
}
