//! # StoreLens Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The sales aggregation & price-simulation engine ([`sales`])
//! - The bounded usage-event log and its persistence port ([`analytics`])
//! - The event-summary recompute used by the polling dashboard reader
//!
//! ## Architecture Principles
//! - Only depends on `storelens-common` and `storelens-domain`
//! - No file, network, or platform code
//! - The persistence sink is reached exclusively via a trait
//! - Pure, testable business logic

pub mod analytics;
pub mod sales;

// Re-export specific items to avoid ambiguity
pub use analytics::ports::EventSink;
pub use analytics::summary::EventSummary;
pub use analytics::EventLog;
pub use sales::simulation::simulate_price_change;
pub use sales::SalesCatalog;
