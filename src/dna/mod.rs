//! DNA input model — validated grids and content fingerprints
//!
//! Raw row data off the wire is untrusted: it may be missing, contain null
//! rows, be ragged, or carry characters outside the nucleotide alphabet.
//! Everything downstream works on a [`Grid`] that has already passed the
//! full validation pipeline.

mod fingerprint;
mod grid;

pub use grid::{DnaError, Grid};
