//! # StoreLens Common
//!
//! Foundation utilities shared across the StoreLens workspace.
//!
//! This crate contains:
//! - Bounded collections (currently the [`collections::RingBuffer`]
//!   backing the analytics event log)
//!
//! ## Architecture
//! - No dependencies on other StoreLens crates
//! - No external dependencies
//! - Pure data structures only, no I/O

pub mod collections;

pub use collections::RingBuffer;
