use arrow_array::{Array, ArrayRef};
use sift_error::{SiftResult, sift_bail};

/// Return a zero-copy slice of `length` rows of an array, starting at `offset`.
///
/// # Errors
///
/// Slicing returns an error if you attempt to slice a range that exceeds the bounds of the
/// underlying array.
pub fn slice(array: &ArrayRef, offset: usize, length: usize) -> SiftResult<ArrayRef> {
    check_slice_bounds(array.len(), offset, length)?;

    if offset == 0 && length == array.len() {
        return Ok(array.clone());
    }

    Ok(array.slice(offset, length))
}

pub(crate) fn check_slice_bounds(len: usize, offset: usize, length: usize) -> SiftResult<()> {
    if offset > len {
        sift_bail!(OutOfBounds: offset, 0, len);
    }
    match offset.checked_add(length) {
        Some(stop) if stop <= len => Ok(()),
        Some(stop) => sift_bail!(OutOfBounds: stop, 0, len),
        None => sift_bail!("slice length {length} overflows from offset {offset}"),
    }
}
