//! Screening service — validate, dedup, scan, record
//!
//! The end-to-end path a submission takes: raw rows are validated into a
//! grid, fingerprinted, resolved against the record store, scanned on a
//! miss, and the verdict recorded. Aggregate statistics derive from the
//! same store.

mod screening;
mod stats;

pub use screening::{ScreenError, ScreeningService};
pub use stats::Stats;

use serde::{Deserialize, Serialize};

/// Wire shape of a screening request: `{"dna": ["ATGC", ...]}`.
///
/// Both the sequence and individual rows are optional so that malformed
/// payloads reach the validator instead of dying in deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnaRequest {
    pub dna: Option<Vec<Option<String>>>,
}

impl DnaRequest {
    pub fn new<S: Into<String>>(rows: impl IntoIterator<Item = S>) -> Self {
        Self {
            dna: Some(rows.into_iter().map(|r| Some(r.into())).collect()),
        }
    }
}
