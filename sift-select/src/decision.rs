use std::fmt::{Display, Formatter};

use arrow_array::BooleanArray;
use sift_array::{Container, Indices};
use sift_error::SiftResult;

/// The single container operation a selector resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// Return the container unchanged.
    NoOp,
    /// Keep `length` rows starting at the 0-based `offset`.
    Slice { offset: usize, length: usize },
    /// Gather rows by 0-based position.
    Take(Indices),
    /// Keep rows where the mask is true. The mask has exactly one slot per row.
    Filter { mask: BooleanArray, keep_na: bool },
}

impl Decision {
    /// Perform the decision against `container`, issuing at most one engine call.
    ///
    /// Errors from the container are returned unchanged.
    pub fn apply<C: Container>(&self, container: &C) -> SiftResult<C> {
        match self {
            Self::NoOp => Ok(container.clone()),
            Self::Slice { offset, length } => container.slice(*offset, *length),
            Self::Take(indices) => container.take(indices),
            Self::Filter { mask, keep_na } => container.filter(mask, *keep_na),
        }
    }
}

impl Display for Decision {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoOp => write!(f, "no-op"),
            Self::Slice { offset, length } => write!(f, "slice(offset={offset}, length={length})"),
            Self::Take(indices) => write!(f, "take({indices})"),
            Self::Filter { mask, keep_na } => {
                write!(f, "filter(len={}, keep_na={keep_na})", mask.len())
            }
        }
    }
}
