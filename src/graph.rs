//! `T`-way partitioning as a layered-DAG shortest path.
//!
//! The partition problem reformulates as a graph: `T + 1` layers of nodes
//! `0..=n`, an edge from `(t−1, i)` to `(t, j)` for every `i < j` weighted
//! `−score(i, j)`, source `(0, 0)`, sink `(T, n)`. Every source-to-sink path
//! crosses each layer once with strictly increasing node indices, so a path
//! is exactly a partition and the minimum-weight path is the maximum-score
//! partition.
//!
//! The DAG is implicit: layers are processed in order and each node takes the
//! minimum over its predecessors, which is all the shortest-path machinery a
//! layered graph needs. `O(n²T)` time, `O(nT)` space. Rational score only —
//! the one functional whose range scores collapse to a partial-sum table
//! lookup per edge.
//!
//! # Example
//!
//! ```rust
//! use part_scan::graph::PartitionGraph;
//!
//! let a = vec![-2.0, -1.5, 0.5, 1.0, 2.5];
//! let b = vec![1.0; 5];
//!
//! let pg = PartitionGraph::new(2, a, b).unwrap();
//! assert_eq!(pg.optimal_subsets().len(), 2);
//! assert!(pg.optimal_weight() < 0.0);
//! ```

use crate::scoring::{Objective, ScoringContext};
use crate::{check_part_count, priority, Result};

// ─────────────────────────────────────────────────────────────────────────────
// Solver
// ─────────────────────────────────────────────────────────────────────────────

/// Layered-graph partition solver.
///
/// Construction copies the inputs, sorts them by priority, builds the
/// partial-sum tables, and runs the layered relaxation; accessors are
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct PartitionGraph {
    t: usize,
    perm: Vec<usize>,
    bounds: Vec<usize>,
    weight: f32,
}

impl PartitionGraph {
    /// Solve for the optimal `t`-way partition of the given items.
    ///
    /// # Errors
    ///
    /// - [`crate::PartScanError::InvalidPartitionCount`] unless `1 <= t <= n`.
    /// - [`crate::PartScanError::DegenerateInput`] when any `b_i <= 0`.
    ///
    /// # Panics
    ///
    /// Panics if `a` and `b` differ in length.
    pub fn new(t: usize, mut a: Vec<f32>, mut b: Vec<f32>) -> Result<Self> {
        check_part_count(t, a.len())?;
        let perm = priority::sort_by_priority(&mut a, &mut b);
        let ctx = ScoringContext::new(a, b, Objective::RationalScore, true, true)?;

        let (bounds, weight) = relax(&ctx, t);

        log::debug!("graph solve: n={} t={} weight={}", ctx.len(), t, weight);

        Ok(Self {
            t,
            perm,
            bounds,
            weight,
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

    /// Total weight of the shortest path: the negated aggregate score of the
    /// optimal partition, so smaller is better.
    #[must_use]
    pub fn optimal_weight(&self) -> f32 {
        self.weight
    }

    /// Number of parts solved for.
    #[must_use]
    pub fn num_parts(&self) -> usize {
        self.t
    }
}

/// Layer-by-layer relaxation with predecessor tracking.
///
/// Node `(layer, j)` is feasible only when `layer <= j <= n − (t − layer)`:
/// enough items behind it for `layer` parts, enough ahead for the rest.
/// Predecessors of a feasible node are themselves feasible, so the scan never
/// reads an unreached cell. Predecessors scan ascending with strict
/// improvement, keeping the smallest index — the mirror image of the dynamic
/// program's split choice, which is what makes the two solvers agree
/// edge-for-edge.
fn relax(ctx: &ScoringContext, t: usize) -> (Vec<usize>, f32) {
    let n = ctx.len();
    let cols = n + 1;
    let mut dist = vec![f32::INFINITY; (t + 1) * cols];
    let mut pred = vec![0usize; (t + 1) * cols];

    dist[0] = 0.0;
    for layer in 1..=t {
        for j in layer..=(n - (t - layer)) {
            let mut best = f32::INFINITY;
            let mut best_i = layer - 1;
            for i in (layer - 1)..j {
                let d = dist[(layer - 1) * cols + i];
                if !d.is_finite() {
                    continue;
                }
                let cand = d - ctx.score(i, j);
                if cand < best {
                    best = cand;
                    best_i = i;
                }
            }
            dist[layer * cols + j] = best;
            pred[layer * cols + j] = best_i;
        }
    }

    let mut bounds = vec![0usize; t + 1];
    bounds[t] = n;
    let mut j = n;
    for layer in (1..=t).rev() {
        j = pred[layer * cols + j];
        bounds[layer - 1] = j;
    }

    (bounds, dist[t * cols + n])
}

// ─────────────────────────────────────────────────────────────────────────────
// Entry Points
// ─────────────────────────────────────────────────────────────────────────────

/// Optimal `t`-way partition as caller-index subsets.
///
/// # Errors
///
/// See [`PartitionGraph::new`].
pub fn optimal_partition(t: usize, a: &[f32], b: &[f32]) -> Result<Vec<Vec<usize>>> {
    PartitionGraph::new(t, a.to_vec(), b.to_vec()).map(|pg| pg.optimal_subsets())
}

/// Weight of the optimal partition's path.
///
/// # Errors
///
/// See [`PartitionGraph::new`].
pub fn optimal_weight(t: usize, a: &[f32], b: &[f32]) -> Result<f32> {
    PartitionGraph::new(t, a.to_vec(), b.to_vec()).map(|pg| pg.optimal_weight())
}

/// Optimal partition and its path weight in one call.
///
/// # Errors
///
/// See [`PartitionGraph::new`].
pub fn optimize_one(t: usize, a: &[f32], b: &[f32]) -> Result<(Vec<Vec<usize>>, f32)> {
    let pg = PartitionGraph::new(t, a.to_vec(), b.to_vec())?;
    Ok((pg.optimal_subsets(), pg.optimal_weight()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
