use std::fmt::Display;
use std::sync::Arc;

use arrow_array::ArrayRef;
use sift_array::compute::{FunctionOptions, call_function};
use sift_error::SiftResult;

use crate::{ExprRef, SiftExpr};

#[derive(Debug)]
pub struct IsNull {
    child: ExprRef,
}

impl IsNull {
    pub fn new_expr(child: ExprRef) -> ExprRef {
        Arc::new(Self { child })
    }
}

impl Display for IsNull {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "is_null({})", self.child)
    }
}

impl SiftExpr for IsNull {
    fn evaluate(&self, scope: &ArrayRef) -> SiftResult<ArrayRef> {
        let array = self.child.evaluate(scope)?;
        call_function("is_null", &[array], &FunctionOptions::None)
    }
}

pub fn is_null(child: ExprRef) -> ExprRef {
    IsNull::new_expr(child)
}
