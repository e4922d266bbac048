//! # StoreLens Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The JSON dataset loader with load-boundary validation ([`dataset`])
//! - The file-backed event sink mirroring the bounded log ([`storage`])
//! - The interval-driven summary refresher ([`refresh`])
//!
//! ## Architecture
//! - Implements traits defined in `storelens-core`
//! - Depends on `storelens-domain` and `storelens-core`
//! - Contains all "impure" code (file I/O, timers)

pub mod dataset;
pub mod errors;
pub mod refresh;
pub mod storage;

// Re-export commonly used items
pub use dataset::{load_sales_from_path, load_sales_from_str, DatasetIssue, LoadReport};
pub use errors::InfraError;
pub use refresh::{demo_events, SummaryRefresher, SummarySnapshot};
pub use storage::JsonFileStore;
