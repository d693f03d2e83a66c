//! Exact `T`-way partitioning by dynamic programming.
//!
//! Classical table over (prefix length × parts used): the best score for the
//! first `ℓ` items in `k` parts extends the best `k−1`-part solution over
//! every feasible split point, with the scoring context supplying the
//! per-range score. Backpointers reconstruct the partition. `O(n²T)` time,
//! `O(nT)` space, any [`Objective`] in either semantic mode.
//!
//! # Example
//!
//! ```rust
//! use part_scan::dp;
//! use part_scan::scoring::Objective;
//!
//! let a = vec![-2.0, -1.5, 0.5, 1.0, 2.5];
//! let b = vec![1.0; 5];
//!
//! let (subsets, score) =
//!     dp::optimize_one(2, &a, &b, Objective::RationalScore, true, false).unwrap();
//! assert_eq!(subsets.len(), 2);
//! assert!(score > 0.0);
//! ```

use crate::scoring::{Objective, ScoringContext};
use crate::sweep::fan_out;
use crate::{check_denominators, check_part_count, priority, PartScanError, Result};

// ─────────────────────────────────────────────────────────────────────────────
// Solver
// ─────────────────────────────────────────────────────────────────────────────

/// Dynamic-programming partition solver.
///
/// Construction copies the inputs, sorts them by priority, fills the score
/// and backpointer tables, and reconstructs the optimal partition; accessors
/// are read-only afterwards.
#[derive(Debug, Clone)]
pub struct DpSolver {
    t: usize,
    perm: Vec<usize>,
    bounds: Vec<usize>,
    score_by_subset: Vec<f32>,
    optimal: f32,
}

impl DpSolver {
    /// Solve for the optimal `t`-way partition of the given items.
    ///
    /// # Errors
    ///
    /// - [`PartScanError::InvalidPartitionCount`] unless `1 <= t <= n`.
    /// - [`PartScanError::OptimizationUnsupported`] when
    ///   `use_rational_optimization` is set for a non-rational objective.
    /// - [`PartScanError::DegenerateInput`] when any `b_i <= 0`.
    ///
    /// # Panics
    ///
    /// Panics if `a` and `b` differ in length.
    pub fn new(
        t: usize,
        mut a: Vec<f32>,
        mut b: Vec<f32>,
        objective: Objective,
        risk_partitioning: bool,
        use_rational_optimization: bool,
    ) -> Result<Self> {
        check_part_count(t, a.len())?;
        let perm = priority::sort_by_priority(&mut a, &mut b);
        let ctx = ScoringContext::new(a, b, objective, risk_partitioning, use_rational_optimization)?;

        let (bounds, optimal) = run(&ctx, t);
        let score_by_subset = bounds
            .windows(2)
            .map(|w| ctx.score(w[0], w[1]))
            .collect();

        log::debug!(
            "dp solve: n={} t={} objective={:?} score={}",
            ctx.len(),
            t,
            objective,
            optimal
        );

        Ok(Self {
            t,
            perm,
            bounds,
            score_by_subset,
            optimal,
        })
    }

    /// The optimal partition: `t` subsets of caller indices, each ascending
    /// in priority order, parts in partition order.
    #[must_use]
    pub fn optimal_subsets(&self) -> Vec<Vec<usize>> {
        self.bounds
            .windows(2)
            .map(|w| (w[0]..w[1]).map(|k| self.perm[k]).collect())
            .collect()
    }

    /// Raw score of each part, in partition order.
    #[must_use]
    pub fn score_by_subset(&self) -> &[f32] {
        &self.score_by_subset
    }

    /// Aggregate score of the optimal partition.
    #[must_use]
    pub fn optimal_score(&self) -> f32 {
        self.optimal
    }

    /// Number of parts solved for.
    #[must_use]
    pub fn num_parts(&self) -> usize {
        self.t
    }
}

/// Fill the DP tables and reconstruct part boundaries.
///
/// Returns the `t + 1` sorted-position boundaries (`0` and `n` included) and
/// the aggregate score. Split points scan ascending with strict improvement,
/// so the smallest maximizing split is kept — the same canonical choice the
/// graph solver makes.
fn run(ctx: &ScoringContext, t: usize) -> (Vec<usize>, f32) {
    let n = ctx.len();
    let cols = t + 1;
    let mut best = vec![f32::NEG_INFINITY; (n + 1) * cols];
    let mut split = vec![0usize; (n + 1) * cols];

    best[0] = 0.0;
    for l in 1..=n {
        best[l * cols + 1] = ctx.score(0, l);
    }
    for k in 2..=t {
        // A prefix of l items supports k parts only when l >= k.
        for l in k..=n {
            let mut best_val = f32::NEG_INFINITY;
            let mut best_m = k - 1;
            for m in (k - 1)..l {
                let v = best[m * cols + k - 1] + ctx.score(m, l);
                if v > best_val {
                    best_val = v;
                    best_m = m;
                }
            }
            best[l * cols + k] = best_val;
            split[l * cols + k] = best_m;
        }
    }

    let mut bounds = vec![0usize; t + 1];
    bounds[t] = n;
    let mut l = n;
    for k in (2..=t).rev() {
        l = split[l * cols + k];
        bounds[k - 1] = l;
    }

    (bounds, best[n * cols + t])
}

// ─────────────────────────────────────────────────────────────────────────────
// Entry Points
// ─────────────────────────────────────────────────────────────────────────────

/// Optimal `t`-way partition as caller-index subsets.
///
/// # Errors
///
/// See [`DpSolver::new`].
pub fn optimal_partition(
    t: usize,
    a: &[f32],
    b: &[f32],
    objective: Objective,
    risk_partitioning: bool,
    use_rational_optimization: bool,
) -> Result<Vec<Vec<usize>>> {
    DpSolver::new(
        t,
        a.to_vec(),
        b.to_vec(),
        objective,
        risk_partitioning,
        use_rational_optimization,
    )
    .map(|solver| solver.optimal_subsets())
}

/// Optimal partition and its aggregate score in one call.
///
/// # Errors
///
/// See [`DpSolver::new`].
pub fn optimize_one(
    t: usize,
    a: &[f32],
    b: &[f32],
    objective: Objective,
    risk_partitioning: bool,
    use_rational_optimization: bool,
) -> Result<(Vec<Vec<usize>>, f32)> {
    let solver = DpSolver::new(
        t,
        a.to_vec(),
        b.to_vec(),
        objective,
        risk_partitioning,
        use_rational_optimization,
    )?;
    Ok((solver.optimal_subsets(), solver.optimal_score()))
}

fn validate_sweep(
    t: usize,
    a: &[f32],
    b: &[f32],
    objective: Objective,
    use_rational_optimization: bool,
) -> Result<()> {
    check_part_count(t.max(1), a.len())?;
    check_denominators(b)?;
    if use_rational_optimization && !objective.supports_rational_optimization() {
        return Err(PartScanError::OptimizationUnsupported { objective });
    }
    Ok(())
}

/// Solve every part count `t, t-1, …, 2` in turn.
///
/// Entries arrive in that order, each an `(subsets, aggregate score)` pair.
///
/// # Errors
///
/// See [`DpSolver::new`]; inputs are validated before the first solve.
pub fn sweep(
    t: usize,
    a: &[f32],
    b: &[f32],
    objective: Objective,
    risk_partitioning: bool,
    use_rational_optimization: bool,
) -> Result<Vec<(Vec<Vec<usize>>, f32)>> {
    validate_sweep(t, a, b, objective, use_rational_optimization)?;
    (2..=t)
        .rev()
        .map(|tp| {
            optimize_one(
                tp,
                a,
                b,
                objective,
                risk_partitioning,
                use_rational_optimization,
            )
        })
        .collect()
}

/// Best entry of [`sweep`]: the part count maximizing the aggregate score.
///
/// # Errors
///
/// [`PartScanError::InvalidPartitionCount`] when `t < 2` leaves nothing to
/// sweep; otherwise see [`DpSolver::new`].
pub fn sweep_best(
    t: usize,
    a: &[f32],
    b: &[f32],
    objective: Objective,
    risk_partitioning: bool,
    use_rational_optimization: bool,
) -> Result<(Vec<Vec<usize>>, f32)> {
    if t < 2 {
        return Err(PartScanError::InvalidPartitionCount { t, n: a.len() });
    }
    let entries = sweep(t, a, b, objective, risk_partitioning, use_rational_optimization)?;
    let mut iter = entries.into_iter();
    let mut best = iter.next().expect("sweep over t >= 2 is non-empty");
    for entry in iter {
        if entry.1 > best.1 {
            best = entry;
        }
    }
    Ok(best)
}

/// [`sweep`] computed on the global thread pool; entry order is unspecified.
///
/// # Errors
///
/// See [`sweep`]; inputs are validated before any task is spawned.
pub fn sweep_parallel(
    t: usize,
    a: &[f32],
    b: &[f32],
    objective: Objective,
    risk_partitioning: bool,
    use_rational_optimization: bool,
) -> Result<Vec<(Vec<Vec<usize>>, f32)>> {
    validate_sweep(t, a, b, objective, use_rational_optimization)?;
    Ok(fan_out((2..=t).rev(), |tp| {
        optimize_one(
            tp,
            a,
            b,
            objective,
            risk_partitioning,
            use_rational_optimization,
        )
        .ok()
    }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
