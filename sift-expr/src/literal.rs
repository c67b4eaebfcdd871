use std::fmt::{Display, Formatter};
use std::iter;
use std::sync::Arc;

use arrow_array::{
    Array, ArrayRef, BooleanArray, Float64Array, Int32Array, Int64Array, StringArray, UInt64Array,
};
use arrow_cast::display::array_value_to_string;
use sift_error::SiftResult;

use crate::{ExprRef, SiftExpr};

/// A single typed value, held as a one-element array.
#[derive(Debug, Clone)]
pub struct Scalar(ArrayRef);

impl Scalar {
    pub fn as_array(&self) -> &ArrayRef {
        &self.0
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() || self.0.is_null(0) {
            return write!(f, "null");
        }
        let value = array_value_to_string(self.0.as_ref(), 0).map_err(|_| std::fmt::Error)?;
        write!(f, "{value}")
    }
}

macro_rules! scalar_from {
    ($T:ty, $A:ty) => {
        impl From<$T> for Scalar {
            fn from(value: $T) -> Self {
                Self(Arc::new(<$A>::from(vec![value])))
            }
        }
    };
}

scalar_from!(bool, BooleanArray);
scalar_from!(i32, Int32Array);
scalar_from!(i64, Int64Array);
scalar_from!(f64, Float64Array);
scalar_from!(&str, StringArray);
scalar_from!(String, StringArray);

#[derive(Debug)]
pub struct Literal {
    value: Scalar,
}

impl Literal {
    pub fn new_expr(value: Scalar) -> ExprRef {
        Arc::new(Self { value })
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl SiftExpr for Literal {
    /// Broadcast the literal to the length of the scope.
    fn evaluate(&self, scope: &ArrayRef) -> SiftResult<ArrayRef> {
        let indices: UInt64Array = iter::repeat_n(0u64, scope.len()).collect();
        Ok(arrow_select::take::take(
            self.value.as_array().as_ref(),
            &indices,
            None,
        )?)
    }
}

/// Create a new `Literal` expression from a type that coerces to `Scalar`.
///
/// ## Example usage
///
/// ```
/// use std::sync::Arc;
///
/// use arrow_array::{ArrayRef, Int32Array};
/// use sift_expr::lit;
///
/// let number = lit(34i32);
/// assert_eq!(number.to_string(), "34");
///
/// let scope: ArrayRef = Arc::new(Int32Array::from(vec![1, 2]));
/// let expected: ArrayRef = Arc::new(Int32Array::from(vec![34, 34]));
/// assert_eq!(&number.evaluate(&scope).unwrap(), &expected);
/// ```
pub fn lit(value: impl Into<Scalar>) -> ExprRef {
    Literal::new_expr(value.into())
}
