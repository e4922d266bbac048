//! Port interfaces for the analytics event log.
//!
//! These traits define the boundary between the log's business logic and
//! infrastructure implementations.

use storelens_domain::{AnalyticsEvent, Result};

/// Capability to mirror the retained event sequence to a local store.
///
/// The log calls [`save`](EventSink::save) after every successful append
/// with the full retained sequence. Implementations are best-effort: a
/// returned error is logged by the caller and never affects in-memory
/// state.
pub trait EventSink: Send + Sync {
    /// Persists the retained event sequence, replacing any previous
    /// mirror.
    fn save(&self, events: &[AnalyticsEvent]) -> Result<()>;
}
