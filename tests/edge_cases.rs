//! Boundary behaviors and construction failures across the public surface.

use part_scan::dp::{self, DpSolver};
use part_scan::graph::{self, PartitionGraph};
use part_scan::ltss;
use part_scan::scoring::{Objective, ScoringContext};
use part_scan::{sweep, PartScanError};

const RATIONAL: Objective = Objective::RationalScore;

// ─────────────────────────────────────────────────────────────────────────────
// Boundary part counts
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn one_part_takes_all_indices() {
    let a = vec![0.5, -1.0, 3.0, 2.0];
    let b = vec![1.0, 2.0, 0.5, 1.5];

    let dp = DpSolver::new(1, a.clone(), b.clone(), RATIONAL, true, false).unwrap();
    let pg = PartitionGraph::new(1, a, b).unwrap();

    for subsets in [dp.optimal_subsets(), pg.optimal_subsets()] {
        assert_eq!(subsets.len(), 1);
        let mut indices = subsets[0].clone();
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }
}

#[test]
fn n_parts_are_singletons() {
    let a = vec![0.5, -1.0, 3.0, 2.0];
    let b = vec![1.0, 2.0, 0.5, 1.5];

    let dp = DpSolver::new(4, a.clone(), b.clone(), RATIONAL, true, false).unwrap();
    let pg = PartitionGraph::new(4, a, b).unwrap();

    for subsets in [dp.optimal_subsets(), pg.optimal_subsets()] {
        assert_eq!(subsets.len(), 4);
        assert!(subsets.iter().all(|s| s.len() == 1));
        let mut flat: Vec<usize> = subsets.into_iter().flatten().collect();
        flat.sort_unstable();
        assert_eq!(flat, vec![0, 1, 2, 3]);
    }
}

#[test]
fn indistinguishable_items_still_partition() {
    let a = vec![1.5; 7];
    let b = vec![0.5; 7];

    for t in 1..=7 {
        let dp = DpSolver::new(t, a.clone(), b.clone(), RATIONAL, true, false).unwrap();
        let subsets = dp.optimal_subsets();
        assert_eq!(subsets.len(), t);
        assert!(subsets.iter().all(|s| !s.is_empty()));
        let flat: Vec<usize> = subsets.into_iter().flatten().collect();
        assert_eq!(flat, (0..7).collect::<Vec<_>>());
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Invalid construction
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn zero_and_oversized_part_counts_error() {
    let a = vec![1.0, 2.0, 3.0];
    let b = vec![1.0; 3];

    for t in [0usize, 4, 100] {
        assert_eq!(
            DpSolver::new(t, a.clone(), b.clone(), RATIONAL, true, false).unwrap_err(),
            PartScanError::InvalidPartitionCount { t, n: 3 }
        );
        assert_eq!(
            PartitionGraph::new(t, a.clone(), b.clone()).unwrap_err(),
            PartScanError::InvalidPartitionCount { t, n: 3 }
        );
    }
}

#[test]
fn non_positive_denominators_error_everywhere() {
    let a = vec![1.0, 2.0, 3.0];
    let bad = vec![1.0, -0.25, 1.0];

    let expected = PartScanError::DegenerateInput {
        index: 1,
        value: -0.25,
    };
    assert_eq!(
        DpSolver::new(2, a.clone(), bad.clone(), RATIONAL, true, false).unwrap_err(),
        expected
    );
    assert_eq!(
        PartitionGraph::new(2, a.clone(), bad.clone()).unwrap_err(),
        expected
    );
    assert_eq!(ltss::optimal_subset(&a, &bad).unwrap_err(), expected);
    assert_eq!(sweep::sweep(2, &a, &bad).unwrap_err(), expected);
    assert_eq!(sweep::sweep_parallel(2, &a, &bad).unwrap_err(), expected);
}

#[test]
fn optimization_flag_outside_rational_errors() {
    let a = vec![1.0, 2.0];
    let b = vec![1.0, 1.0];

    for objective in [Objective::Gaussian, Objective::Poisson] {
        let err = ScoringContext::new(a.clone(), b.clone(), objective, true, true).unwrap_err();
        assert_eq!(err, PartScanError::OptimizationUnsupported { objective });

        // The same failure surfaces through solver construction.
        let err =
            DpSolver::new(2, a.clone(), b.clone(), objective, true, true).unwrap_err();
        assert_eq!(err, PartScanError::OptimizationUnsupported { objective });
    }
}

#[test]
fn failed_construction_yields_no_partial_results() {
    let a = vec![1.0, 2.0, 3.0];
    let b = vec![1.0, 0.0, 1.0];

    // Entry points return the error, never a partially-filled partition.
    assert!(dp::optimize_one(2, &a, &b, RATIONAL, true, false).is_err());
    assert!(graph::optimize_one(2, &a, &b).is_err());
    assert!(ltss::optimize_one(&a, &b).is_err());
}

// ─────────────────────────────────────────────────────────────────────────────
// Functional families at the boundary
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn cluster_detection_clamps_unremarkable_ranges_to_zero() {
    // Every numerator below its denominator: nothing exceeds ambient.
    let a = vec![0.1, 0.2, 0.3, 0.4];
    let b = vec![1.0; 4];

    for objective in [Objective::Gaussian, Objective::Poisson] {
        let dp = DpSolver::new(2, a.clone(), b.clone(), objective, false, false).unwrap();
        assert!(dp.score_by_subset().iter().all(|&s| s == 0.0));
        assert_eq!(dp.optimal_score(), 0.0);
    }
}

#[test]
fn risk_partitioning_keeps_raw_contributions() {
    let a = vec![0.1, 0.2, 0.3, 0.4];
    let b = vec![1.0; 4];

    let dp = DpSolver::new(2, a.clone(), b.clone(), Objective::Gaussian, true, false).unwrap();
    assert!(dp.score_by_subset().iter().all(|&s| s > 0.0));
}
