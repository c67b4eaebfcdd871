use arrow_array::{Array, ArrayRef};
use arrow_select::take::TakeOptions;
use sift_error::{SiftResult, sift_bail};

/// Create a new array by taking the values from `array` at the given `indices`.
///
/// Indices must be an integer typed array. Null indices produce null values. Indices outside the
/// bounds of `array` are reported as an error rather than a panic.
pub fn take(array: &ArrayRef, indices: &ArrayRef) -> SiftResult<ArrayRef> {
    check_indices(indices)?;

    Ok(arrow_select::take::take(
        array.as_ref(),
        indices.as_ref(),
        Some(TakeOptions { check_bounds: true }),
    )?)
}

pub(crate) fn check_indices(indices: &ArrayRef) -> SiftResult<()> {
    if !indices.data_type().is_integer() {
        sift_bail!(
            "Take indices must be an integer type, got {}",
            indices.data_type()
        );
    }
    Ok(())
}
