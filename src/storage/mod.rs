//! Record storage — fingerprint-keyed verdict persistence
//!
//! The screening service only needs a key-value contract: look up a
//! fingerprint, insert a record at most once, count verdicts. The
//! fingerprint is the uniqueness key; records are never updated or deleted
//! here. [`MemoryStore`] keeps everything in a map; [`JsonStore`] adds
//! write-through JSON persistence.

mod json;

pub use json::JsonStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::RwLock;
use thiserror::Error;
use uuid::Uuid;

/// A screened DNA sample. The verdict for a fingerprint is computed once
/// and never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnaRecord {
    pub id: String,
    pub fingerprint: String,
    pub is_mutant: bool,
    pub created_at: DateTime<Utc>,
}

impl DnaRecord {
    pub fn new(fingerprint: impl Into<String>, is_mutant: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            fingerprint: fingerprint.into(),
            is_mutant,
            created_at: Utc::now(),
        }
    }
}

/// Storage failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with the same fingerprint already exists. Expected when two
    /// identical submissions race; the caller decides whether it matters.
    #[error("record already exists for fingerprint {0}")]
    Duplicate(String),
    #[error("storage i/o failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Key-value contract the screening service runs against.
pub trait RecordStore: Send + Sync {
    /// Look up a record by fingerprint.
    fn find(&self, fingerprint: &str) -> Result<Option<DnaRecord>, StoreError>;

    /// Insert a new record. Fails with [`StoreError::Duplicate`] when the
    /// fingerprint is already present; the stored record is untouched.
    fn insert(&self, record: DnaRecord) -> Result<(), StoreError>;

    /// Number of records carrying the given verdict.
    fn count_by_verdict(&self, is_mutant: bool) -> Result<u64, StoreError>;
}

/// In-memory store. The default for tests and short-lived runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, DnaRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordStore for MemoryStore {
    fn find(&self, fingerprint: &str) -> Result<Option<DnaRecord>, StoreError> {
        Ok(self.records.read().unwrap().get(fingerprint).cloned())
    }

    fn insert(&self, record: DnaRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().unwrap();
        match records.entry(record.fingerprint.clone()) {
            Entry::Occupied(_) => Err(StoreError::Duplicate(record.fingerprint)),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    fn count_by_verdict(&self, is_mutant: bool) -> Result<u64, StoreError> {
        let records = self.records.read().unwrap();
        Ok(records.values().filter(|r| r.is_mutant == is_mutant).count() as u64)
    }
}
