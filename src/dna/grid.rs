//! Grid — validated NxN nucleotide matrix
//!
//! Validation is all-or-nothing: either every check passes and an immutable
//! matrix comes back, or the first failing check names the reason. No
//! scanning happens on a grid that was never validated.

use thiserror::Error;

/// Validation failures for raw DNA input. Each variant carries the
/// human-readable reason surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DnaError {
    #[error("dna sequence is missing or empty")]
    MissingOrEmpty,
    #[error("dna contains a null row")]
    NullRow,
    #[error("dna must be a square matrix (NxN)")]
    NotSquare,
    #[error("dna contains invalid characters (only A, T, C, G are allowed)")]
    InvalidCharacters,
}

/// A validated NxN DNA matrix. Immutable once constructed; bases are stored
/// flattened in row-major order so scans index without bounds surprises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    n: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Validate raw row data as it arrives off the wire, where both the row
    /// sequence and individual rows may be absent.
    ///
    /// Checks run in order: presence, per-row presence, squareness,
    /// alphabet. The first failure wins.
    pub fn from_raw(raw: Option<&[Option<String>]>) -> Result<Self, DnaError> {
        let rows = raw.ok_or(DnaError::MissingOrEmpty)?;
        if rows.is_empty() {
            return Err(DnaError::MissingOrEmpty);
        }
        let n = rows.len();
        let mut cells = Vec::with_capacity(n * n);
        for row in rows {
            let row = row.as_deref().ok_or(DnaError::NullRow)?;
            push_row(&mut cells, row, n)?;
        }
        Ok(Self { n, cells })
    }

    /// Validate a plain list of rows (no absent entries possible).
    pub fn new<S: AsRef<str>>(rows: &[S]) -> Result<Self, DnaError> {
        if rows.is_empty() {
            return Err(DnaError::MissingOrEmpty);
        }
        let n = rows.len();
        let mut cells = Vec::with_capacity(n * n);
        for row in rows {
            push_row(&mut cells, row.as_ref(), n)?;
        }
        Ok(Self { n, cells })
    }

    /// Side length of the matrix.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Base at (row, col). Callers are expected to stay in bounds; the
    /// backing slice panics otherwise.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.n + col]
    }

    /// The row-concatenated bases, row-major, no separators.
    pub fn flattened(&self) -> &[u8] {
        &self.cells
    }
}

fn push_row(cells: &mut Vec<u8>, row: &str, n: usize) -> Result<(), DnaError> {
    if row.chars().count() != n {
        return Err(DnaError::NotSquare);
    }
    if !row.bytes().all(|b| matches!(b, b'A' | b'T' | b'C' | b'G')) {
        return Err(DnaError::InvalidCharacters);
    }
    cells.extend_from_slice(row.as_bytes());
    Ok(())
}
