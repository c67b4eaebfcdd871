use itertools::Itertools;

/// Cyclically repeat `values` until exactly `len` items are produced, truncating the final cycle.
///
/// Recycling an empty sequence produces `len` default values; for a logical mask that is a run of
/// missing values.
pub fn recycle<T: Clone + Default>(values: &[T], len: usize) -> Vec<T> {
    if values.is_empty() {
        return vec![T::default(); len];
    }
    values.iter().cycle().take(len).cloned().collect_vec()
}
