//! Lazily evaluated expressions over a container's scope.
//!
//! An expression is built once and evaluated against the array a container exposes as its
//! scope. For a record batch that is a struct array of its columns, so [`col`] selects a column
//! and [`ident`] refers to the whole scope.

use std::fmt::{Debug, Display};
use std::sync::Arc;

use arrow_array::ArrayRef;
use sift_error::SiftResult;

mod binary;
mod get_item;
mod identity;
mod is_null;
mod literal;
mod not;
mod operators;

pub use binary::*;
pub use get_item::*;
pub use identity::*;
pub use is_null::*;
pub use literal::*;
pub use not::*;
pub use operators::*;

pub type ExprRef = Arc<dyn SiftExpr>;

/// Represents a logical operation on arrays.
pub trait SiftExpr: Debug + Send + Sync + Display {
    /// Compute the result of the expression over the given scope.
    fn evaluate(&self, scope: &ArrayRef) -> SiftResult<ArrayRef>;
}
