#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use part_scan::dp::DpSolver;
use part_scan::graph::PartitionGraph;
use part_scan::scoring::Objective;

#[derive(Arbitrary, Debug)]
struct PartitionInput {
    items: Vec<(f32, f32)>,
    t: u8,
    objective: u8,
    risk_partitioning: bool,
}

fn check_covers(subsets: &[Vec<usize>], n: usize) {
    let mut seen: Vec<usize> = subsets.iter().flatten().copied().collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..n).collect::<Vec<_>>());
}

fuzz_target!(|input: PartitionInput| {
    let mut items = input.items;
    items.truncate(48);
    let n = items.len();
    let a: Vec<f32> = items.iter().map(|&(x, _)| x).collect();
    let b: Vec<f32> = items.iter().map(|&(_, y)| y).collect();
    let t = usize::from(input.t) % (n + 2);

    let objective = match input.objective % 3 {
        0 => Objective::Gaussian,
        1 => Objective::Poisson,
        _ => Objective::RationalScore,
    };

    // Construction either errors cleanly or yields an exact cover.
    if let Ok(dp) = DpSolver::new(
        t,
        a.clone(),
        b.clone(),
        objective,
        input.risk_partitioning,
        false,
    ) {
        check_covers(&dp.optimal_subsets(), n);
        assert_eq!(dp.score_by_subset().len(), t);
    }

    if let Ok(pg) = PartitionGraph::new(t, a, b) {
        let subsets = pg.optimal_subsets();
        assert_eq!(subsets.len(), t);
        check_covers(&subsets, n);
    }
});
