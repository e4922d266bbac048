//! Bounded usage-event log and its derived summaries.
//!
//! The log is an explicit, injectable state object: construct one
//! [`EventLog`] at application start and hand it (behind an `Arc`) to
//! every consumer. Persistence goes through the [`ports::EventSink`]
//! trait so the log itself stays testable without a storage backend.

pub mod log;
pub mod ports;
pub mod summary;

pub use log::EventLog;
pub use ports::EventSink;
pub use summary::EventSummary;
