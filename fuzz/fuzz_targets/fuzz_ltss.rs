#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use part_scan::ltss::LtssSolver;

#[derive(Arbitrary, Debug)]
struct ScanInput {
    items: Vec<(f32, f32)>,
}

fuzz_target!(|input: ScanInput| {
    let mut items = input.items;
    items.truncate(256);
    let a: Vec<f32> = items.iter().map(|&(x, _)| x).collect();
    let b: Vec<f32> = items.iter().map(|&(_, y)| y).collect();

    // Should not panic on any input; a well-formed subset on accepted input.
    if let Ok(solver) = LtssSolver::new(a.clone(), b) {
        let subset = solver.optimal_subset();
        assert!(subset.len() <= a.len());
        assert!(subset.iter().all(|&i| i < a.len()));
    }
});
