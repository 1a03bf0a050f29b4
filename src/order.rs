//! Pre-sort heuristic applied before packing.
//!
//! The packer is first-fit and splits are irreversible, so fit quality is
//! sensitive to processing order. The best order depends on which cap is
//! active: under a width cap, tall items first fill rows evenly; under no cap,
//! big items first leave the most flexible leftovers. The order is computed as
//! an index permutation so callers' own sequences are never reordered.

/// Returns the indices of `sizes` in the order they should be packed.
///
/// Descending by width when a width-only cap is set and the widest item
/// exceeds it, by height under any other cap, and by area with no caps. The
/// sort is stable, so ties keep their input order and the permutation is
/// deterministic.
pub(crate) fn packing_order(
    sizes: &[(u32, u32)],
    max_width: Option<u32>,
    max_height: Option<u32>,
) -> Vec<usize> {
    let widest = sizes.iter().map(|size| size.0).max().unwrap_or(0);
    let wider_than_max = max_width.map_or(false, |max| widest > max);

    let key = |size: (u32, u32)| -> u64 {
        if max_width.is_some() && max_height.is_none() && wider_than_max {
            u64::from(size.0)
        } else if max_width.is_some() || max_height.is_some() {
            u64::from(size.1)
        } else {
            u64::from(size.0) * u64::from(size.1)
        }
    };

    let mut order: Vec<usize> = (0..sizes.len()).collect();
    order.sort_by(|&a, &b| key(sizes[b]).cmp(&key(sizes[a])));
    order
}
