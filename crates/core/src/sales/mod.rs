//! Sales aggregation and price-simulation engine.
//!
//! Everything here is pure and synchronous: each query recomputes its
//! result from the full dataset, and nothing is memoized. The catalog is
//! immutable once constructed; validation of the records it receives is
//! the loader's job, not the engine's.

pub mod catalog;
pub mod simulation;

pub use catalog::SalesCatalog;
pub use simulation::simulate_price_change;
