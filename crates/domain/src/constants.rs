//! Domain-wide constants.

/// Maximum number of analytics events retained by the event log.
///
/// Older events are evicted first once this many are held ("keep last N").
pub const EVENT_LOG_CAPACITY: usize = 50;

/// Default price elasticity of demand used by the what-if simulation.
///
/// Negative values denote the usual inverse price-demand relationship:
/// raising the price lowers the expected units sold.
pub const DEFAULT_DEMAND_ELASTICITY: f64 = -1.2;

/// Fixed key under which the retained event sequence is mirrored to the
/// local persistence sink.
pub const EVENT_STORE_KEY: &str = "analytics_events";
