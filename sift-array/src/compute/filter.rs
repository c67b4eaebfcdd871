use std::sync::Arc;

use arrow_array::{Array, ArrayRef, BooleanArray, UInt64Array};
use sift_error::{SiftResult, sift_bail};

use crate::compute::take;

/// Return a new array containing the rows of `array` where `mask` is true.
///
/// A null mask slot drops its row, unless `keep_na` is set in which case the row is emitted as a
/// null value.
pub fn filter(array: &ArrayRef, mask: &BooleanArray, keep_na: bool) -> SiftResult<ArrayRef> {
    check_mask(array.len(), mask)?;

    if keep_na && mask.null_count() > 0 {
        log::debug!(
            "Filter mask has {} null slots, emitting null rows through take",
            mask.null_count()
        );
        return take(array, &emit_null_indices(mask));
    }

    Ok(arrow_select::filter::filter(array.as_ref(), mask)?)
}

pub(crate) fn check_mask(len: usize, mask: &BooleanArray) -> SiftResult<()> {
    if mask.len() != len {
        sift_bail!(
            "mask.len() is {}, does not equal row count of {}",
            mask.len(),
            len
        );
    }
    Ok(())
}

/// Take indices selecting every true slot of `mask`, with a null index for every null slot.
pub(crate) fn emit_null_indices(mask: &BooleanArray) -> ArrayRef {
    let indices: UInt64Array = mask
        .iter()
        .zip(0u64..)
        .filter_map(|(selected, idx)| match selected {
            Some(true) => Some(Some(idx)),
            Some(false) => None,
            None => Some(None),
        })
        .collect();
    Arc::new(indices)
}
