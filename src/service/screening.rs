//! Screening orchestration over a record store
//!
//! The dedup contract: at most one scan per distinct grid content. The
//! store is checked before scanning; on a hit the stored verdict comes back
//! untouched and the scanner never runs. The scan itself is a pure function
//! of content, so the rare cross-request race (both miss, both scan, one
//! insert loses) costs a redundant scan but never a wrong answer.

use log::debug;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{DnaRequest, Stats};
use crate::detector::ScanStrategy;
use crate::dna::{DnaError, Grid};
use crate::storage::{DnaRecord, RecordStore, StoreError};

/// Failures surfaced by the screening service.
#[derive(Debug, thiserror::Error)]
pub enum ScreenError {
    /// The submitted DNA failed validation. A caller problem, surfaced
    /// synchronously and never logged as a system fault.
    #[error("invalid dna: {0}")]
    InvalidDna(#[from] DnaError),
    /// The backing store failed for a reason other than a duplicate key.
    #[error("storage failure: {0}")]
    Store(#[from] StoreError),
}

/// Orchestrates validation, dedup lookup, strategy selection, scanning and
/// verdict recording.
pub struct ScreeningService<S> {
    store: S,
    scans_performed: AtomicU64,
}

impl<S: RecordStore> ScreeningService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            scans_performed: AtomicU64::new(0),
        }
    }

    /// Screen raw row data end to end: validate, then resolve.
    pub fn screen(&self, raw: Option<&[Option<String>]>) -> Result<bool, ScreenError> {
        let grid = Grid::from_raw(raw)?;
        self.resolve(&grid)
    }

    /// Screen a deserialized request.
    pub fn screen_request(&self, request: &DnaRequest) -> Result<bool, ScreenError> {
        self.screen(request.dna.as_deref())
    }

    /// Screen rows that are all present (the common programmatic path).
    pub fn screen_rows<T: AsRef<str>>(&self, rows: &[T]) -> Result<bool, ScreenError> {
        let grid = Grid::new(rows)?;
        self.resolve(&grid)
    }

    /// Resolve a validated grid against the store, scanning only on a miss.
    pub fn resolve(&self, grid: &Grid) -> Result<bool, ScreenError> {
        let fingerprint = grid.fingerprint();
        if let Some(record) = self.store.find(&fingerprint)? {
            debug!("verdict cache hit for {}", &fingerprint[..12]);
            return Ok(record.is_mutant);
        }

        let strategy = ScanStrategy::for_size(grid.size());
        let is_mutant = strategy.scan(grid);
        self.scans_performed.fetch_add(1, Ordering::Relaxed);
        debug!(
            "scanned {n}x{n} grid via {strategy:?}: mutant={is_mutant}",
            n = grid.size()
        );

        // A concurrent request with the same content may have inserted
        // between our lookup and this insert. The verdict is identical
        // either way, so a duplicate key is not a failure.
        match self.store.insert(DnaRecord::new(fingerprint, is_mutant)) {
            Ok(()) => {}
            Err(StoreError::Duplicate(fp)) => {
                debug!("lost insert race for {}", &fp[..12]);
            }
            Err(e) => return Err(e.into()),
        }
        Ok(is_mutant)
    }

    /// Aggregate statistics over everything screened so far.
    pub fn stats(&self) -> Result<Stats, ScreenError> {
        let mutants = self.store.count_by_verdict(true)?;
        let humans = self.store.count_by_verdict(false)?;
        Ok(Stats::from_counts(mutants, humans))
    }

    /// Number of scans actually executed, i.e. cache misses.
    pub fn scans_performed(&self) -> u64 {
        self.scans_performed.load(Ordering::Relaxed)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
