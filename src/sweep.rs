//! Sweeps over candidate part counts.
//!
//! Picking the number of parts is usually part of the problem, so the driver
//! solves every candidate `T' ∈ {T, T−1, …, 2}` and reports all of them, the
//! best of them, or all of them computed on a thread pool. Solves for
//! different part counts are independent, so the parallel sweep fans each
//! one out as its own task and collects results through an unbounded MPMC
//! channel; completion order is whatever the pool produces, and each entry
//! identifies itself by the number of subsets it carries.
//!
//! # Example
//!
//! ```rust
//! use part_scan::sweep;
//!
//! let a = vec![-3.0, -1.0, 0.5, 2.0, 4.0, 6.0];
//! let b = vec![1.0; 6];
//!
//! let (subsets, weight) = sweep::sweep_best(4, &a, &b).unwrap();
//! assert!(subsets.len() >= 2 && subsets.len() <= 4);
//! assert!(weight < 0.0);
//! ```

use crate::graph::PartitionGraph;
use crate::{check_denominators, check_part_count, PartScanError, Result};

/// A solved candidate: the partition and its path weight.
pub type SweepEntry = (Vec<Vec<usize>>, f32);

// ─────────────────────────────────────────────────────────────────────────────
// Fan-Out
// ─────────────────────────────────────────────────────────────────────────────

/// Run one task per candidate part count on the global thread pool.
///
/// The pool is rayon's process-wide pool, lazily initialized on first use and
/// alive until process exit. Tasks push finished results into an unbounded
/// MPMC channel; the channel drains after every task completes, so the
/// returned order is completion order. Tasks that produce nothing are simply
/// absent from the result.
pub(crate) fn fan_out<R, F>(candidates: impl Iterator<Item = usize> + Send, task: F) -> Vec<R>
where
    R: Send,
    F: Fn(usize) -> Option<R> + Sync,
{
    let (tx, rx) = crossbeam_channel::unbounded();
    rayon::scope(|scope| {
        for tp in candidates {
            let tx = tx.clone();
            let task = &task;
            scope.spawn(move |_| {
                if let Some(result) = task(tp) {
                    let _ = tx.send(result);
                }
            });
        }
    });
    drop(tx);
    rx.iter().collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Entry Points
// ─────────────────────────────────────────────────────────────────────────────

fn validate(t: usize, a: &[f32], b: &[f32]) -> Result<()> {
    check_part_count(t.max(1), a.len())?;
    check_denominators(b)
}

/// Solve every part count `t, t-1, …, 2` in turn, serially.
///
/// # Errors
///
/// See [`PartitionGraph::new`]; inputs are validated before the first solve.
pub fn sweep(t: usize, a: &[f32], b: &[f32]) -> Result<Vec<SweepEntry>> {
    validate(t, a, b)?;
    (2..=t)
        .rev()
        .map(|tp| {
            let pg = PartitionGraph::new(tp, a.to_vec(), b.to_vec())?;
            let weight = pg.optimal_weight();
            log::debug!("sweep candidate: parts={tp} weight={weight}");
            Ok((pg.optimal_subsets(), weight))
        })
        .collect()
}

/// Best entry of [`sweep`]: the part count minimizing the path weight.
///
/// Ties keep the larger part count, the first one swept.
///
/// # Errors
///
/// [`PartScanError::InvalidPartitionCount`] when `t < 2` leaves nothing to
/// sweep; otherwise see [`PartitionGraph::new`].
pub fn sweep_best(t: usize, a: &[f32], b: &[f32]) -> Result<SweepEntry> {
    if t < 2 {
        return Err(PartScanError::InvalidPartitionCount { t, n: a.len() });
    }
    let entries = sweep(t, a, b)?;
    let mut iter = entries.into_iter();
    let mut best = iter.next().expect("sweep over t >= 2 is non-empty");
    for entry in iter {
        if entry.1 < best.1 {
            best = entry;
        }
    }
    Ok(best)
}

/// [`sweep`] computed on the global thread pool; entry order is unspecified.
///
/// Each entry carries its part count implicitly as the number of subsets, so
/// callers can rebuild a `T' → entry` mapping regardless of completion order.
///
/// # Errors
///
/// See [`sweep`]; inputs are validated before any task is spawned.
pub fn sweep_parallel(t: usize, a: &[f32], b: &[f32]) -> Result<Vec<SweepEntry>> {
    validate(t, a, b)?;
    Ok(fan_out((2..=t).rev(), |tp| {
        let pg = PartitionGraph::new(tp, a.to_vec(), b.to_vec()).ok()?;
        let weight = pg.optimal_weight();
        log::debug!("sweep candidate: parts={tp} weight={weight}");
        Some((pg.optimal_subsets(), weight))
    }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
