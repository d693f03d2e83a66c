//! Priority-sort preprocessor.
//!
//! Every solver operates on items ordered by ascending `a_i / b_i`, the
//! priority order. Sorting is stable so that tied ratios keep their input
//! order and the canonical partition is reproducible.

/// Stable-sort both statistic vectors by ascending `a_i / b_i`, in place.
///
/// Returns the permutation applied: `perm[k]` is the original index of the
/// item now at sorted position `k`. Callers that need to recover original
/// item identities keep this permutation; the solvers in this crate do
/// exactly that to report subsets in caller indices.
///
/// `b_i = 0` produces an IEEE infinite ratio and still orders totally via
/// [`f32::total_cmp`]; whether such input is accepted at all is decided by
/// the solvers, not here.
///
/// # Panics
///
/// Panics if `a` and `b` differ in length.
pub fn sort_by_priority(a: &mut [f32], b: &mut [f32]) -> Vec<usize> {
    assert_eq!(a.len(), b.len(), "statistic vectors must have equal length");

    let mut order: Vec<usize> = (0..a.len()).collect();
    order.sort_by(|&i, &j| (a[i] / b[i]).total_cmp(&(a[j] / b[j])));

    let a_sorted: Vec<f32> = order.iter().map(|&i| a[i]).collect();
    let b_sorted: Vec<f32> = order.iter().map(|&i| b[i]).collect();
    a.copy_from_slice(&a_sorted);
    b.copy_from_slice(&b_sorted);

    order
}
