use std::fmt::{Display, Formatter};
use std::sync::Arc;

use arrow_array::{Array, ArrayRef, BooleanArray, Int64Array};
use sift_error::SiftResult;

use crate::compute::{filter, slice, take};

/// A columnar value whose rows can be selected.
///
/// Implementations delegate every operation to a single kernel call of the underlying engine.
pub trait Container: Clone {
    /// The number of rows in the container.
    fn row_count(&self) -> usize;

    /// Return the `length` rows starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns an error if `offset + length` exceeds [`Container::row_count`].
    fn slice(&self, offset: usize, length: usize) -> SiftResult<Self>;

    /// Gather the rows at the given 0-based `indices`, in order.
    fn take(&self, indices: &Indices) -> SiftResult<Self>;

    /// Keep the rows where `mask` is true.
    ///
    /// When `keep_na` is set, a null slot in the mask yields a null row in the output, otherwise
    /// it drops the row.
    fn filter(&self, mask: &BooleanArray, keep_na: bool) -> SiftResult<Self>;

    /// The array that expressions over this container are evaluated against.
    fn scope(&self) -> SiftResult<ArrayRef>;
}

/// Row indices handed to [`Container::take`].
#[derive(Debug, Clone)]
pub enum Indices {
    /// 0-based row positions.
    Positions(Vec<i64>),
    /// An integer typed array of row positions, passed to the engine untouched.
    Array(ArrayRef),
}

impl Indices {
    /// The number of rows this take produces.
    pub fn len(&self) -> usize {
        match self {
            Self::Positions(positions) => positions.len(),
            Self::Array(array) => array.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert to an Arrow array suitable for the take kernel.
    pub fn to_array(&self) -> ArrayRef {
        match self {
            Self::Positions(positions) => Arc::new(Int64Array::from(positions.clone())),
            Self::Array(array) => array.clone(),
        }
    }
}

impl Display for Indices {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positions(positions) => write!(f, "positions(len={})", positions.len()),
            Self::Array(array) => write!(f, "{}(len={})", array.data_type(), array.len()),
        }
    }
}

impl PartialEq for Indices {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Positions(lhs), Self::Positions(rhs)) => lhs == rhs,
            (Self::Array(lhs), Self::Array(rhs)) => lhs.as_ref() == rhs.as_ref(),
            _ => false,
        }
    }
}

impl From<Vec<i64>> for Indices {
    fn from(positions: Vec<i64>) -> Self {
        Self::Positions(positions)
    }
}

impl Container for ArrayRef {
    fn row_count(&self) -> usize {
        self.len()
    }

    fn slice(&self, offset: usize, length: usize) -> SiftResult<Self> {
        slice(self, offset, length)
    }

    fn take(&self, indices: &Indices) -> SiftResult<Self> {
        take(self, &indices.to_array())
    }

    fn filter(&self, mask: &BooleanArray, keep_na: bool) -> SiftResult<Self> {
        filter(self, mask, keep_na)
    }

    fn scope(&self) -> SiftResult<ArrayRef> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use arrow_array::cast::AsArray;
    use arrow_array::types::Int32Type;
    use arrow_array::{Int32Array, UInt8Array};

    use super::*;

    fn values() -> ArrayRef {
        Arc::new(Int32Array::from(vec![10, 20, 30, 40, 50]))
    }

    fn collect(array: &ArrayRef) -> Vec<Option<i32>> {
        array.as_primitive::<Int32Type>().iter().collect()
    }

    #[test]
    fn slice_array() {
        let sliced = Container::slice(&values(), 1, 3).unwrap();
        assert_eq!(collect(&sliced), vec![Some(20), Some(30), Some(40)]);
    }

    #[test]
    fn slice_out_of_bounds() {
        assert!(Container::slice(&values(), 4, 2).is_err());
    }

    #[test]
    fn take_positions() {
        let taken = values()
            .take(&Indices::Positions(vec![4, 0, 0]))
            .unwrap();
        assert_eq!(collect(&taken), vec![Some(50), Some(10), Some(10)]);
    }

    #[test]
    fn take_native_indices() {
        let indices: ArrayRef = Arc::new(UInt8Array::from(vec![1, 3]));
        let taken = values().take(&Indices::Array(indices)).unwrap();
        assert_eq!(collect(&taken), vec![Some(20), Some(40)]);
    }

    #[test]
    fn take_out_of_bounds_is_an_error() {
        assert!(values().take(&Indices::Positions(vec![5])).is_err());
    }

    #[test]
    fn filter_drops_nulls() {
        let mask = BooleanArray::from(vec![Some(true), None, Some(false), Some(true), None]);
        let filtered = values().filter(&mask, false).unwrap();
        assert_eq!(collect(&filtered), vec![Some(10), Some(40)]);
    }

    #[test]
    fn filter_keeps_nulls() {
        let mask = BooleanArray::from(vec![Some(true), None, Some(false), Some(true), None]);
        let filtered = values().filter(&mask, true).unwrap();
        assert_eq!(collect(&filtered), vec![Some(10), None, Some(40), None]);
    }

    #[test]
    fn indices_compare_by_value() {
        let lhs: ArrayRef = Arc::new(UInt8Array::from(vec![1, 3]));
        let rhs: ArrayRef = Arc::new(UInt8Array::from(vec![1, 3]));
        assert_eq!(Indices::Array(lhs.clone()), Indices::Array(rhs));
        assert_ne!(Indices::Array(lhs), Indices::Positions(vec![1, 3]));
    }

    #[test]
    fn indices_len() {
        assert_eq!(Indices::from(vec![0, 2]).len(), 2);
        assert!(Indices::Positions(vec![]).is_empty());
    }
}
