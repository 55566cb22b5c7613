//! Aggregate screening statistics

use serde::{Deserialize, Serialize};

/// Verdict counts and their ratio, recomputed on demand from the store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub count_mutant_dna: u64,
    pub count_human_dna: u64,
    pub ratio: f64,
}

impl Stats {
    /// Build stats from raw verdict counts. The ratio with no human
    /// records is defined as zero — an explicit contract, not a
    /// side effect of float division.
    pub fn from_counts(count_mutant_dna: u64, count_human_dna: u64) -> Self {
        let ratio = if count_human_dna == 0 {
            0.0
        } else {
            count_mutant_dna as f64 / count_human_dna as f64
        };
        Self {
            count_mutant_dna,
            count_human_dna,
            ratio,
        }
    }
}
