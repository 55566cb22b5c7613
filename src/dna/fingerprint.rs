//! Content fingerprinting for verdict deduplication
//!
//! The digest is computed over the flattened row-concatenated bases with no
//! separators, so two submissions that split the same base string into
//! different rows collapse to one fingerprint. That collapse is part of the
//! store's key contract, not an accident.

use sha2::{Digest, Sha256};

use super::Grid;

impl Grid {
    /// Lowercase hex SHA-256 over the row-concatenated bases.
    ///
    /// Deterministic and unsalted: equal content always yields the equal
    /// key the dedup store relies on.
    pub fn fingerprint(&self) -> String {
        hex::encode(Sha256::digest(self.flattened()))
    }
}
