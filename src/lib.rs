//! Genoscan — mutant DNA screening engine
//!
//! Determines whether an NxN nucleotide matrix contains more than one run
//! of four identical bases (horizontal, vertical, or either diagonal),
//! deduplicating work through content-addressed verdict records.

pub mod detector;
pub mod dna;
pub mod service;
pub mod storage;

pub use detector::{ScanStrategy, PARALLEL_THRESHOLD, RUN_LENGTH};
pub use dna::{DnaError, Grid};
pub use service::{DnaRequest, ScreenError, ScreeningService, Stats};
pub use storage::{DnaRecord, JsonStore, MemoryStore, RecordStore, StoreError};
