//! Sales dataset loader.
//!
//! The engine trusts its input completely, so malformed records are
//! stopped here: each one is dropped with a warning and reported in the
//! [`LoadReport`], and only clean records travel further.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use storelens_domain::{Result, Sale, StoreLensError};
use tracing::{info, warn};

/// One rejected record and why it was rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetIssue {
    /// Identifier of the offending record.
    pub identifier: String,
    /// Human-readable rejection reason.
    pub reason: String,
}

/// Outcome of a dataset load: how many records survived and which were
/// dropped.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Number of records accepted.
    pub loaded: usize,
    /// Records dropped at the boundary.
    pub rejected: Vec<DatasetIssue>,
}

/// Loads and validates the sales dataset from a JSON file.
///
/// # Errors
/// Returns [`StoreLensError::Dataset`] when the file cannot be read or
/// does not parse as a list of sale records. Individually malformed
/// records are not an error: they are dropped and reported.
pub fn load_sales_from_path(path: &Path) -> Result<(Vec<Sale>, LoadReport)> {
    let raw = fs::read_to_string(path).map_err(|err| {
        StoreLensError::Dataset(format!("failed to read {}: {err}", path.display()))
    })?;
    let result = load_sales_from_str(&raw)?;
    info!(
        path = %path.display(),
        loaded = result.1.loaded,
        rejected = result.1.rejected.len(),
        "sales dataset loaded"
    );
    Ok(result)
}

/// Loads and validates the sales dataset from a JSON string.
///
/// # Errors
/// Returns [`StoreLensError::Dataset`] when the payload does not parse
/// as a list of sale records.
pub fn load_sales_from_str(raw: &str) -> Result<(Vec<Sale>, LoadReport)> {
    let records: Vec<Sale> = serde_json::from_str(raw)
        .map_err(|err| StoreLensError::Dataset(format!("failed to parse dataset: {err}")))?;
    Ok(validate(records))
}

/// Splits the parsed records into accepted ones and boundary rejections.
fn validate(records: Vec<Sale>) -> (Vec<Sale>, LoadReport) {
    let mut seen: HashSet<String> = HashSet::new();
    let mut accepted = Vec::with_capacity(records.len());
    let mut rejected = Vec::new();

    for sale in records {
        if let Some(reason) = record_issue(&sale, &seen) {
            warn!(identifier = %sale.identifier, %reason, "rejecting malformed sale record");
            rejected.push(DatasetIssue { identifier: sale.identifier, reason });
            continue;
        }
        seen.insert(sale.identifier.clone());
        accepted.push(sale);
    }

    let report = LoadReport { loaded: accepted.len(), rejected };
    (accepted, report)
}

fn record_issue(sale: &Sale, seen: &HashSet<String>) -> Option<String> {
    if sale.identifier.is_empty() {
        return Some("empty identifier".into());
    }
    if seen.contains(&sale.identifier) {
        return Some("duplicate identifier".into());
    }
    if !sale.revenue.is_finite() || sale.revenue < 0.0 {
        return Some(format!("revenue out of range: {}", sale.revenue));
    }
    if !sale.margin.is_finite() || !(0.0..=1.0).contains(&sale.margin) {
        return Some(format!("margin outside [0, 1]: {}", sale.margin));
    }
    if sale.ticket_count > sale.units_sold {
        return Some(format!(
            "ticket count {} exceeds units sold {}",
            sale.ticket_count, sale.units_sold
        ));
    }
    None
}
