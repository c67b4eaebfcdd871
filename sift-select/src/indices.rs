use hashbrown::HashSet;
use itertools::Itertools;

/// Whether 1-based row numbers can be expressed as a single slice.
///
/// That is the case when they are non-empty, all positive, and ascend by exactly one from the
/// first to the last.
pub fn is_sliceable(indices: &[i64]) -> bool {
    !indices.is_empty()
        && indices.iter().all(|&i| i > 0)
        && indices
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.checked_add(1) == Some(*b))
}

/// The ascending 1-based row numbers in `1..=row_count` that are not named by `excluded`.
///
/// `excluded` holds negated row numbers; rows beyond `row_count` are ignored.
pub fn complement(excluded: &[i64], row_count: usize) -> Vec<i64> {
    let excluded: HashSet<u64> = excluded.iter().map(|i| i.unsigned_abs()).collect();
    (1i64..)
        .take(row_count)
        .filter(|row| !excluded.contains(&row.unsigned_abs()))
        .collect()
}
