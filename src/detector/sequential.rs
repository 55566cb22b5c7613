//! Sequential scan — single pass over all cells
//!
//! Row-major iteration with a local run counter. Returns the moment the
//! second run turns up; no further cells are examined.

use super::Direction;
use crate::dna::Grid;

/// Scan the whole grid on the calling thread.
pub fn scan_sequential(grid: &Grid) -> bool {
    let n = grid.size();
    let mut runs = 0usize;
    for row in 0..n {
        for col in 0..n {
            for dir in Direction::ALL {
                if dir.run_at(grid, row, col) {
                    runs += 1;
                    if runs > 1 {
                        return true;
                    }
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Grid {
        Grid::new(rows).unwrap()
    }

    #[test]
    fn test_two_horizontal_runs() {
        assert!(scan_sequential(&grid(&["AAAA", "CCCC", "TCAG", "GGTC"])));
    }

    #[test]
    fn test_two_vertical_runs() {
        assert!(scan_sequential(&grid(&["ATCG", "ATCG", "ATCG", "ATCG"])));
    }

    #[test]
    fn test_two_main_diagonal_runs() {
        assert!(scan_sequential(&grid(&[
            "ATGCGA", "CAGTGC", "TTATGT", "AGAAGG", "CCCCTA", "TCACTG",
        ])));
    }

    #[test]
    fn test_two_anti_diagonal_runs() {
        assert!(scan_sequential(&grid(&[
            "GTGCAT", "CAGTTC", "TTATGT", "AGTATG", "CTCTTA", "TCTCTG",
        ])));
    }

    #[test]
    fn test_horizontal_plus_vertical() {
        assert!(scan_sequential(&grid(&[
            "AAAACG", "TCTGCA", "TCTGCT", "TCTGCC", "GAGTCA", "CAGTGC",
        ])));
    }

    #[test]
    fn test_vertical_plus_main_diagonal() {
        assert!(scan_sequential(&grid(&["ACGT", "AACG", "ATAG", "ATTA"])));
    }

    #[test]
    fn test_vertical_plus_anti_diagonal() {
        assert!(scan_sequential(&grid(&["AGCT", "TGTT", "ATGT", "TATT"])));
    }

    #[test]
    fn test_both_diagonals_x_shape() {
        assert!(scan_sequential(&grid(&[
            "ATGAA", "CAGAA", "TCAAC", "AATAA", "AGTCA",
        ])));
    }

    #[test]
    fn test_overlapping_windows_each_count() {
        // One row of five identical bases yields two horizontal runs, which
        // alone crosses the threshold.
        assert!(scan_sequential(&grid(&[
            "AAAAA", "CTGCA", "TGCAT", "GCATG", "CATGC",
        ])));
    }

    #[test]
    fn test_uniform_4x4_is_mutant() {
        assert!(scan_sequential(&grid(&["AAAA", "AAAA", "AAAA", "AAAA"])));
    }

    #[test]
    fn test_large_scattered_mutant() {
        assert!(scan_sequential(&grid(&[
            "ATGCGTACGA",
            "CAGTGCTAGC",
            "TTATGTTAGT",
            "AGAAAAGCTA",
            "CCCCTAGGTA",
            "TCACTGACCA",
            "GGTACCGTAA",
            "GTAAGGCCAA",
            "GCGGTTAAGG",
            "GAGGTTCCGG",
        ])));
    }

    #[test]
    fn test_no_runs_is_human() {
        assert!(!scan_sequential(&grid(&["ATGC", "CAGT", "TTAT", "AGAC"])));
    }

    #[test]
    fn test_exactly_one_run_is_human() {
        assert!(!scan_sequential(&grid(&["AAAA", "CAGT", "TTAT", "AGAC"])));
    }

    #[test]
    fn test_one_vertical_run_is_human() {
        assert!(!scan_sequential(&grid(&["ATGC", "ACGC", "ATTC", "ATGA"])));
    }

    #[test]
    fn test_single_cell_is_human() {
        assert!(!scan_sequential(&grid(&["A"])));
    }
}
