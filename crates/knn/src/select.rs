//! Top-k nearest neighbor selection.

/// Selects the `k_eff` nearest candidates by distance.
///
/// Uses a stable full sort on `(distance, index)` pairs, so equal distances
/// keep their original dataset order. Distances are non-negative and finite
/// by construction; `total_cmp` keeps the ordering total regardless.
///
/// Writes `(index, distance)` pairs, closest first, into `out`.
///
/// # Panics
///
/// Debug-asserts that `k_eff >= 1` and `k_eff <= distances.len()`.
pub(crate) fn select_k_nearest(distances: &[f64], k_eff: usize, out: &mut Vec<(usize, f64)>) {
    debug_assert!(k_eff >= 1);
    debug_assert!(k_eff <= distances.len());

    out.clear();
    out.extend(distances.iter().copied().enumerate());
    out.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
    out.truncate(k_eff);
}
