use std::fmt::Display;
use std::sync::Arc;

use arrow_array::cast::AsArray;
use arrow_array::{Array, ArrayRef};
use sift_error::{SiftResult, sift_err};

use crate::{ExprRef, SiftExpr};

#[derive(Debug)]
pub struct Not {
    child: ExprRef,
}

impl Not {
    pub fn new_expr(child: ExprRef) -> ExprRef {
        Arc::new(Self { child })
    }
}

impl Display for Not {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "!{}", self.child)
    }
}

impl SiftExpr for Not {
    fn evaluate(&self, scope: &ArrayRef) -> SiftResult<ArrayRef> {
        let child_result = self.child.evaluate(scope)?;
        let bools = child_result
            .as_boolean_opt()
            .ok_or_else(|| sift_err!(MismatchedTypes: "boolean", child_result.data_type()))?;
        Ok(Arc::new(arrow_arith::boolean::not(bools)?))
    }
}

pub fn not(operand: ExprRef) -> ExprRef {
    Not::new_expr(operand)
}
