//! # StoreLens Domain
//!
//! Business domain types and models for StoreLens.
//!
//! This crate contains:
//! - Domain data types (Sale, StoreStats, AnalyticsEvent, ...)
//! - Domain error types and Result definitions
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other StoreLens crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use constants::*;
pub use errors::*;
pub use types::*;
