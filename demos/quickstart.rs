//! Example: partitioning the same items with all three solvers.
//!
//! Run: `cargo run --example quickstart`

use part_scan::prelude::*;

fn main() -> Result<()> {
    // Per-item statistics (in real usage, gradient/hessian aggregates or
    // observed/expected counts). Input order is arbitrary; solvers sort by
    // a/b internally and answer in these original indices.
    let a = vec![0.4, -1.8, 2.1, -0.3, 1.2, -2.4, 0.9, 3.0];
    let b = vec![1.0, 0.9, 1.1, 1.0, 0.8, 1.2, 1.0, 0.9];

    println!("Items (index: a/b):");
    for (i, (x, y)) in a.iter().zip(&b).enumerate() {
        println!("  {i}: {:.3}", x / y);
    }

    // Exact 3-way partition via the graph solver (rational score).
    println!("\n=== Graph solver, 3 parts ===");
    let pg = PartitionGraph::new(3, a.clone(), b.clone())?;
    for (k, subset) in pg.optimal_subsets().iter().enumerate() {
        println!("  part {k}: {subset:?}");
    }
    println!("  path weight: {:.4}", pg.optimal_weight());

    // The same partition from the dynamic program, plus per-part scores.
    println!("\n=== DP solver, 3 parts ===");
    let dp = DpSolver::new(3, a.clone(), b.clone(), Objective::RationalScore, true, true)?;
    for (subset, score) in dp.optimal_subsets().iter().zip(dp.score_by_subset()) {
        println!("  {subset:?} scores {score:.4}");
    }

    // Gaussian scoring in cluster-detection mode instead.
    println!("\n=== DP solver, Gaussian cluster detection ===");
    let dp = DpSolver::new(3, a.clone(), b.clone(), Objective::Gaussian, false, false)?;
    println!("  aggregate score: {:.4}", dp.optimal_score());

    // Single best subset as a baseline.
    println!("\n=== Subset scan ===");
    let ltss = LtssSolver::new(a, b)?;
    println!(
        "  subset {:?} scores {:.4}",
        ltss.optimal_subset(),
        ltss.optimal_score()
    );

    Ok(())
}
