//! Linear-time subset scan.
//!
//! Finds the best single contiguous subset of priority-ordered items under
//! the rational score `C²/B`, where "best" accounts for the ambient mass the
//! subset leaves behind: the scan walks every split point once, maintaining
//! running numerator/denominator sums for the leading complement and the
//! trailing candidate subset, and keeps the split whose combined score is
//! maximal. `O(n)` time, `O(1)` extra space.
//!
//! The chosen subset is exactly the second part of the optimal 2-partition,
//! which is what makes this scan the baseline the dynamic program ties out
//! against at `T = 2`.
//!
//! # Example
//!
//! ```rust
//! use part_scan::ltss;
//!
//! let a = vec![-2.0, -1.0, 0.5, 3.0];
//! let b = vec![1.0; 4];
//!
//! let (subset, score) = ltss::optimize_one(&a, &b).unwrap();
//! assert_eq!(subset, vec![2, 3]);
//! ```

use crate::{check_denominators, priority, Result};

// ─────────────────────────────────────────────────────────────────────────────
// Solver
// ─────────────────────────────────────────────────────────────────────────────

/// Single-subset scan solver.
///
/// Construction copies the inputs, sorts them by priority, and runs the scan;
/// accessors are read-only afterwards.
#[derive(Debug, Clone)]
pub struct LtssSolver {
    perm: Vec<usize>,
    start: usize,
    end: usize,
    score: f32,
}

impl LtssSolver {
    /// Scan for the best contiguous subset of the given items.
    ///
    /// Inputs of fewer than two items have no split to scan; the whole input
    /// (possibly empty) is returned as the subset.
    ///
    /// # Errors
    ///
    /// [`crate::PartScanError::DegenerateInput`] when any `b_i <= 0`.
    ///
    /// # Panics
    ///
    /// Panics if `a` and `b` differ in length.
    pub fn new(mut a: Vec<f32>, mut b: Vec<f32>) -> Result<Self> {
        check_denominators(&b)?;
        let perm = priority::sort_by_priority(&mut a, &mut b);
        let n = a.len();

        let rational = |num: f64, den: f64| ((num * num) / den) as f32;

        if n < 2 {
            let score = if n == 0 {
                0.0
            } else {
                rational(f64::from(a[0]), f64::from(b[0]))
            };
            return Ok(Self {
                perm,
                start: 0,
                end: n,
                score,
            });
        }

        let total_a: f64 = a.iter().map(|&v| f64::from(v)).sum();
        let total_b: f64 = b.iter().map(|&v| f64::from(v)).sum();

        // One forward pass over split points. Scores round to f32 per
        // candidate, mirroring the dynamic program's comparison sequence so
        // the two agree split-for-split; strict `>` keeps the lowest start.
        let mut head_a = 0.0f64;
        let mut head_b = 0.0f64;
        let mut best = f32::NEG_INFINITY;
        let mut best_start = 1;
        let mut best_tail_score = 0.0f32;
        for m in 1..n {
            head_a += f64::from(a[m - 1]);
            head_b += f64::from(b[m - 1]);
            let tail = rational(total_a - head_a, total_b - head_b);
            let combined = rational(head_a, head_b) + tail;
            if combined > best {
                best = combined;
                best_start = m;
                best_tail_score = tail;
            }
        }

        Ok(Self {
            perm,
            start: best_start,
            end: n,
            score: best_tail_score,
        })
    }

    /// Caller indices of the chosen subset, ascending in priority order.
    #[must_use]
    pub fn optimal_subset(&self) -> Vec<usize> {
        (self.start..self.end).map(|k| self.perm[k]).collect()
    }

    /// Rational score of the chosen subset itself.
    #[must_use]
    pub fn optimal_score(&self) -> f32 {
        self.score
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Entry Points
// ─────────────────────────────────────────────────────────────────────────────

/// Best single contiguous subset, as caller indices.
///
/// # Errors
///
/// See [`LtssSolver::new`].
pub fn optimal_subset(a: &[f32], b: &[f32]) -> Result<Vec<usize>> {
    Ok(LtssSolver::new(a.to_vec(), b.to_vec())?.optimal_subset())
}

/// Score of the best single contiguous subset.
///
/// # Errors
///
/// See [`LtssSolver::new`].
pub fn optimal_score(a: &[f32], b: &[f32]) -> Result<f32> {
    Ok(LtssSolver::new(a.to_vec(), b.to_vec())?.optimal_score())
}

/// Best subset and its score in one call.
///
/// # Errors
///
/// See [`LtssSolver::new`].
pub fn optimize_one(a: &[f32], b: &[f32]) -> Result<(Vec<usize>, f32)> {
    let solver = LtssSolver::new(a.to_vec(), b.to_vec())?;
    Ok((solver.optimal_subset(), solver.optimal_score()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Brute force over every split of the sorted items, same rounding and
    /// tie-break as the scan.
    fn brute_force(a: &[f32], b: &[f32]) -> (usize, usize) {
        let mut a = a.to_vec();
        let mut b = b.to_vec();
        priority::sort_by_priority(&mut a, &mut b);
        let n = a.len();

        let range = |s: usize, e: usize| {
            let num: f64 = a[s..e].iter().map(|&v| f64::from(v)).sum();
            let den: f64 = b[s..e].iter().map(|&v| f64::from(v)).sum();
            ((num * num) / den) as f32
        };

        let mut best = (1, f32::NEG_INFINITY);
        for m in 1..n {
            let combined = range(0, m) + range(m, n);
            if combined > best.1 {
                best = (m, combined);
            }
        }
        (best.0, n)
    }

    #[test]
    fn splits_at_sign_boundary() {
        let a = vec![-8.0, -6.0, -4.0, -2.0, 1.0, 3.0, 5.0, 7.0];
        let b = vec![1.0; 8];
        let solver = LtssSolver::new(a, b).unwrap();
        // Split at 4 concentrates the negative mass in the complement and
        // the positive mass in the subset: 20²/4 + 16²/4 beats every other m.
        assert_eq!(solver.optimal_subset(), vec![4, 5, 6, 7]);
        assert!((solver.optimal_score() - 64.0).abs() < 1e-4);
    }

    #[test]
    fn maps_back_to_caller_indices() {
        // Highest-ratio items sit at the front of the caller's vectors.
        let a = vec![9.0, 4.0, -1.0, -2.0];
        let b = vec![1.0; 4];
        let subset = optimal_subset(&a, &b).unwrap();
        assert_eq!(subset, vec![1, 0]);
    }

    #[test]
    fn matches_brute_force_over_splits() {
        // Deterministic pseudo-random inputs, mixed-sign numerators.
        let mut x = 0x2545f4914f6cdd1du64;
        let mut next = move || {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            (x >> 40) as f32 / 1.6e7 - 0.5
        };

        for n in [2usize, 3, 7, 16, 33, 64] {
            let a: Vec<f32> = (0..n).map(|_| next() * 20.0).collect();
            let b: Vec<f32> = (0..n).map(|_| next().abs() * 10.0 + 0.1).collect();

            let solver = LtssSolver::new(a.clone(), b.clone()).unwrap();
            let (bs, be) = brute_force(&a, &b);
            assert_eq!(
                (solver.start, solver.end),
                (bs, be),
                "n = {n}: scan [{}, {}) vs brute [{bs}, {be})",
                solver.start,
                solver.end
            );
        }
    }

    #[test]
    fn single_item_is_its_own_subset() {
        let solver = LtssSolver::new(vec![3.0], vec![2.0]).unwrap();
        assert_eq!(solver.optimal_subset(), vec![0]);
        assert!((solver.optimal_score() - 4.5).abs() < 1e-6);
    }

    #[test]
    fn empty_input() {
        let solver = LtssSolver::new(vec![], vec![]).unwrap();
        assert!(solver.optimal_subset().is_empty());
        assert_eq!(solver.optimal_score(), 0.0);
    }

    #[test]
    fn degenerate_denominator_rejected() {
        assert!(LtssSolver::new(vec![1.0], vec![0.0]).is_err());
    }
}
