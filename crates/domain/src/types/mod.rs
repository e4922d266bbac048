//! Domain types and models.

pub mod event;
pub mod sale;

pub use event::AnalyticsEvent;
pub use sale::{PriceSimulation, ProductStats, Sale, StoreStats};
