use std::sync::Arc;

use arrow_array::{ArrayRef, BooleanArray};
use sift_expr::ExprRef;

/// A caller's description of which rows to keep.
///
/// Values of unknown shape are classified into a `Selector` once, where they enter the system;
/// [`resolve`](crate::resolve) then matches on the variant.
#[derive(Debug, Clone)]
pub enum Selector {
    /// A single `true`: every row is kept.
    AllTrue,
    /// A logical vector, recycled to the row count. `None` marks a missing value.
    Bools(Vec<Option<bool>>),
    /// 1-based row numbers. All positive keeps those rows, all negative drops them.
    Numeric(Vec<i64>),
    /// An engine native array. Integer arrays hold 0-based row positions, boolean arrays are
    /// masks; any other type is rejected.
    Array(ArrayRef),
    /// An expression that is evaluated against the container before classification.
    Lazy(ExprRef),
    /// A value of some other runtime class.
    Unsupported { class: String },
}

impl Selector {
    pub fn unsupported(class: impl Into<String>) -> Self {
        Self::Unsupported {
            class: class.into(),
        }
    }

    /// The runtime class name reported when a selector cannot be used.
    pub fn class_name(&self) -> &str {
        match self {
            Self::AllTrue | Self::Bools(_) => "logical",
            Self::Numeric(_) => "numeric",
            Self::Array(_) => "Array",
            Self::Lazy(_) => "expression",
            Self::Unsupported { class } => class,
        }
    }
}

impl From<bool> for Selector {
    fn from(value: bool) -> Self {
        if value {
            Self::AllTrue
        } else {
            Self::Bools(vec![Some(false)])
        }
    }
}

impl From<Vec<Option<bool>>> for Selector {
    fn from(values: Vec<Option<bool>>) -> Self {
        if values == [Some(true)] {
            Self::AllTrue
        } else {
            Self::Bools(values)
        }
    }
}

impl From<Vec<bool>> for Selector {
    fn from(values: Vec<bool>) -> Self {
        values.into_iter().map(Some).collect::<Vec<_>>().into()
    }
}

impl From<Vec<i64>> for Selector {
    fn from(values: Vec<i64>) -> Self {
        Self::Numeric(values)
    }
}

impl From<ArrayRef> for Selector {
    fn from(array: ArrayRef) -> Self {
        Self::Array(array)
    }
}

impl From<BooleanArray> for Selector {
    fn from(array: BooleanArray) -> Self {
        Self::Array(Arc::new(array))
    }
}

impl From<ExprRef> for Selector {
    fn from(expr: ExprRef) -> Self {
        Self::Lazy(expr)
    }
}
