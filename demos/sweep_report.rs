//! Example: sweeping part counts in parallel and picking the best.
//!
//! Run: `cargo run --example sweep_report`

use part_scan::sweep;

fn main() -> part_scan::Result<()> {
    let a = vec![
        -3.1, -2.8, -2.2, -1.5, -0.9, -0.4, 0.3, 0.8, 1.4, 2.0, 2.7, 3.3, 4.1, 4.8,
    ];
    let b = vec![1.0; 14];

    // One solve per candidate part count, fanned out on the thread pool.
    let mut entries = sweep::sweep_parallel(8, &a, &b)?;
    entries.sort_by_key(|e| e.0.len());

    println!("parts  weight");
    for (subsets, weight) in &entries {
        println!("{:>5}  {weight:.4}", subsets.len());
    }

    let (best, weight) = sweep::sweep_best(8, &a, &b)?;
    println!("\nbest: {} parts at weight {weight:.4}", best.len());
    for (k, subset) in best.iter().enumerate() {
        println!("  part {k}: {subset:?}");
    }

    Ok(())
}
