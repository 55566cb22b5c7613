//! JSON-backed record store
//!
//! The full record map is loaded once at open and rewritten after every
//! successful insert, so the file on disk always reflects the committed
//! state. Inserts that fail to persist are rolled back in memory and the
//! failure propagates to the caller.

use log::info;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::{DnaRecord, RecordStore, StoreError};

#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    records: Vec<DnaRecord>,
}

#[derive(Serialize)]
struct StoreFileRef<'a> {
    records: Vec<&'a DnaRecord>,
}

/// Write-through JSON store keyed by fingerprint.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    records: RwLock<HashMap<String, DnaRecord>>,
}

impl JsonStore {
    /// Open an existing store file or start fresh if none is present.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let mut map = HashMap::new();
        if path.exists() {
            let data = std::fs::read_to_string(&path)?;
            let file: StoreFile = serde_json::from_str(&data)?;
            for record in file.records {
                map.insert(record.fingerprint.clone(), record);
            }
            info!("Loaded {} screening records from {}", map.len(), path.display());
        }
        Ok(Self {
            path,
            records: RwLock::new(map),
        })
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn persist(&self, records: &HashMap<String, DnaRecord>) -> Result<(), StoreError> {
        let mut list: Vec<&DnaRecord> = records.values().collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        let json = serde_json::to_string_pretty(&StoreFileRef { records: list })?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl RecordStore for JsonStore {
    fn find(&self, fingerprint: &str) -> Result<Option<DnaRecord>, StoreError> {
        Ok(self.records.read().unwrap().get(fingerprint).cloned())
    }

    fn insert(&self, record: DnaRecord) -> Result<(), StoreError> {
        let fingerprint = record.fingerprint.clone();
        let mut records = self.records.write().unwrap();
        match records.entry(fingerprint.clone()) {
            Entry::Occupied(_) => return Err(StoreError::Duplicate(fingerprint)),
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
        }
        if let Err(e) = self.persist(&records) {
            records.remove(&fingerprint);
            return Err(e);
        }
        Ok(())
    }

    fn count_by_verdict(&self, is_mutant: bool) -> Result<u64, StoreError> {
        let records = self.records.read().unwrap();
        Ok(records.values().filter(|r| r.is_mutant == is_mutant).count() as u64)
    }
}
