//! File-backed event sink.
//!
//! The browser-local key-value store of the original system maps to a
//! single JSON file under a fixed name: every save replaces the whole
//! mirror, exactly as a `setItem` under one key would.

use std::fs;
use std::path::{Path, PathBuf};

use storelens_core::EventSink;
use storelens_domain::{AnalyticsEvent, Result, EVENT_STORE_KEY};
use tracing::debug;

use crate::errors::InfraError;

/// [`EventSink`] adapter persisting the retained event sequence as JSON
/// under a single fixed file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store writing under `dir` with the fixed store key as
    /// file name.
    #[must_use]
    pub fn new(dir: &Path) -> Self {
        Self { path: dir.join(format!("{EVENT_STORE_KEY}.json")) }
    }

    /// Creates a store writing to an explicit file path.
    #[must_use]
    pub fn from_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// The file the mirror is written to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted mirror back.
    ///
    /// This exists for external consumers (debugging, offline analysis);
    /// the event log never restores from it on startup. A missing file
    /// reads as an empty sequence.
    ///
    /// # Errors
    /// Returns a storage or serialization error when the file exists but
    /// cannot be read or parsed.
    pub fn load(&self) -> Result<Vec<AnalyticsEvent>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path).map_err(InfraError::Io)?;
        let events = serde_json::from_str(&raw).map_err(InfraError::Json)?;
        Ok(events)
    }

    fn write(&self, events: &[AnalyticsEvent]) -> std::result::Result<(), InfraError> {
        let payload = serde_json::to_vec(events)?;

        // Write-then-rename keeps a crashed save from truncating the
        // previous mirror.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl EventSink for JsonFileStore {
    fn save(&self, events: &[AnalyticsEvent]) -> Result<()> {
        self.write(events)?;
        debug!(path = %self.path.display(), count = events.len(), "mirrored analytics events");
        Ok(())
    }
}
