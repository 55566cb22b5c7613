//! Row-parallel scan — rayon workers over a shared counter
//!
//! Work is partitioned by row; the only shared state is a monotonic atomic
//! run counter. Workers bail as soon as they observe the counter past one
//! or push it past one themselves, so rows processed out of order cannot
//! change the verdict: the threshold check is commutative over rows.

use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::Direction;
use crate::dna::Grid;

/// Scan the grid with one rayon task per row.
pub fn scan_parallel(grid: &Grid) -> bool {
    let n = grid.size();
    let runs = AtomicUsize::new(0);

    // Relaxed is enough: the counter is monotonic, only compared against
    // the threshold, and publishes no other memory.
    (0..n).into_par_iter().any(|row| {
        if runs.load(Ordering::Relaxed) > 1 {
            return true;
        }
        for col in 0..n {
            if runs.load(Ordering::Relaxed) > 1 {
                return true;
            }
            for dir in Direction::ALL {
                if dir.run_at(grid, row, col)
                    && runs.fetch_add(1, Ordering::Relaxed) + 1 > 1
                {
                    return true;
                }
            }
        }
        runs.load(Ordering::Relaxed) > 1
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::scan_sequential;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn grid(rows: &[&str]) -> Grid {
        Grid::new(rows).unwrap()
    }

    fn random_grid(rng: &mut StdRng, n: usize) -> Grid {
        let bases = [b'A', b'T', b'C', b'G'];
        let rows: Vec<String> = (0..n)
            .map(|_| {
                (0..n)
                    .map(|_| bases[rng.gen_range(0..bases.len())] as char)
                    .collect()
            })
            .collect();
        Grid::new(&rows).unwrap()
    }

    #[test]
    fn test_parallel_two_horizontal_runs() {
        assert!(scan_parallel(&grid(&["AAAA", "CCCC", "TCAG", "GGTC"])));
    }

    #[test]
    fn test_parallel_no_runs_is_human() {
        assert!(!scan_parallel(&grid(&["ATGC", "CAGT", "TTAT", "AGAC"])));
    }

    #[test]
    fn test_parallel_exactly_one_run_is_human() {
        assert!(!scan_parallel(&grid(&["AAAA", "CAGT", "TTAT", "AGAC"])));
    }

    #[test]
    fn test_parallel_single_cell() {
        assert!(!scan_parallel(&grid(&["A"])));
    }

    #[test]
    fn test_parallel_uniform_large_grid() {
        let rows: Vec<String> = (0..25).map(|_| "A".repeat(25)).collect();
        assert!(scan_parallel(&Grid::new(&rows).unwrap()));
    }

    #[test]
    fn test_strategies_agree_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(42);
        // Sizes straddling the strategy threshold, many grids per size.
        for n in [1, 2, 4, 5, 7, 10, 19, 20, 21, 32] {
            for _ in 0..40 {
                let g = random_grid(&mut rng, n);
                assert_eq!(
                    scan_sequential(&g),
                    scan_parallel(&g),
                    "strategies disagree on a {}x{} grid: {:?}",
                    n,
                    n,
                    String::from_utf8_lossy(g.flattened())
                );
            }
        }
    }

    #[test]
    fn test_strategies_agree_on_runs_crossing_rows() {
        // Vertical and diagonal runs span several row workers; the shared
        // counter is what makes them add up.
        let g = grid(&[
            "ATGCGA", "CAGTGC", "TTATGT", "AGAAGG", "CCCCTA", "TCACTG",
        ]);
        assert_eq!(scan_sequential(&g), scan_parallel(&g));
        assert!(scan_parallel(&g));
    }
}
