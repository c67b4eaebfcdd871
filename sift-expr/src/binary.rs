use std::fmt::Display;
use std::sync::Arc;

use arrow_arith::boolean::{and_kleene, or_kleene};
use arrow_array::cast::AsArray;
use arrow_array::{Array, ArrayRef, BooleanArray};
use arrow_ord::cmp;
use sift_array::compute::{FunctionOptions, call_function};
use sift_error::{SiftResult, sift_err};

use crate::{ExprRef, Operator, SiftExpr};

#[derive(Debug, Clone)]
pub struct BinaryExpr {
    lhs: ExprRef,
    operator: Operator,
    rhs: ExprRef,
}

impl BinaryExpr {
    pub fn new_expr(lhs: ExprRef, operator: Operator, rhs: ExprRef) -> ExprRef {
        Arc::new(Self { lhs, operator, rhs })
    }
}

impl Display for BinaryExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.lhs, self.operator, self.rhs)
    }
}

impl SiftExpr for BinaryExpr {
    fn evaluate(&self, scope: &ArrayRef) -> SiftResult<ArrayRef> {
        let lhs = self.lhs.evaluate(scope)?;
        let rhs = self.rhs.evaluate(scope)?;

        let result = match self.operator {
            Operator::And => and_kleene(as_bool(&lhs)?, as_bool(&rhs)?)?,
            Operator::Or => or_kleene(as_bool(&lhs)?, as_bool(&rhs)?)?,
            op => {
                // Comparisons require both sides to share a type; coerce the right to the left.
                let rhs = if rhs.data_type() == lhs.data_type() {
                    rhs
                } else {
                    call_function(
                        "cast",
                        &[rhs],
                        &FunctionOptions::cast(lhs.data_type().clone()),
                    )?
                };
                compare(&lhs, &rhs, op)?
            }
        };

        Ok(Arc::new(result))
    }
}

fn as_bool(array: &ArrayRef) -> SiftResult<&BooleanArray> {
    array
        .as_boolean_opt()
        .ok_or_else(|| sift_err!(MismatchedTypes: "boolean", array.data_type()))
}

fn compare(lhs: &ArrayRef, rhs: &ArrayRef, op: Operator) -> SiftResult<BooleanArray> {
    let result = match op {
        Operator::Eq => cmp::eq(lhs, rhs),
        Operator::NotEq => cmp::neq(lhs, rhs),
        Operator::Gt => cmp::gt(lhs, rhs),
        Operator::Gte => cmp::gt_eq(lhs, rhs),
        Operator::Lt => cmp::lt(lhs, rhs),
        Operator::Lte => cmp::lt_eq(lhs, rhs),
        Operator::And | Operator::Or => {
            return Err(sift_err!(
                "operator {} is not a comparison",
                op
            ));
        }
    };
    Ok(result?)
}

/// Create a new `BinaryExpr` using the `Eq` operator.
///
/// ## Example usage
///
/// ```
/// use std::sync::Arc;
///
/// use arrow_array::{ArrayRef, BooleanArray, Int32Array};
/// use sift_expr::{eq, ident, lit};
///
/// let xs: ArrayRef = Arc::new(Int32Array::from(vec![1, 2, 3]));
/// let result = eq(ident(), lit(3)).evaluate(&xs).unwrap();
///
/// let expected: ArrayRef = Arc::new(BooleanArray::from(vec![false, false, true]));
/// assert_eq!(&result, &expected);
/// ```
pub fn eq(lhs: ExprRef, rhs: ExprRef) -> ExprRef {
    BinaryExpr::new_expr(lhs, Operator::Eq, rhs)
}

/// Create a new `BinaryExpr` using the `NotEq` operator.
pub fn not_eq(lhs: ExprRef, rhs: ExprRef) -> ExprRef {
    BinaryExpr::new_expr(lhs, Operator::NotEq, rhs)
}

/// Create a new `BinaryExpr` using the `Gte` operator.
pub fn gt_eq(lhs: ExprRef, rhs: ExprRef) -> ExprRef {
    BinaryExpr::new_expr(lhs, Operator::Gte, rhs)
}

/// Create a new `BinaryExpr` using the `Gt` operator.
pub fn gt(lhs: ExprRef, rhs: ExprRef) -> ExprRef {
    BinaryExpr::new_expr(lhs, Operator::Gt, rhs)
}

/// Create a new `BinaryExpr` using the `Lte` operator.
pub fn lt_eq(lhs: ExprRef, rhs: ExprRef) -> ExprRef {
    BinaryExpr::new_expr(lhs, Operator::Lte, rhs)
}

/// Create a new `BinaryExpr` using the `Lt` operator.
pub fn lt(lhs: ExprRef, rhs: ExprRef) -> ExprRef {
    BinaryExpr::new_expr(lhs, Operator::Lt, rhs)
}

/// Create a new `BinaryExpr` using the `And` operator. Nulls follow Kleene logic.
pub fn and(lhs: ExprRef, rhs: ExprRef) -> ExprRef {
    BinaryExpr::new_expr(lhs, Operator::And, rhs)
}

/// Create a new `BinaryExpr` using the `Or` operator. Nulls follow Kleene logic.
pub fn or(lhs: ExprRef, rhs: ExprRef) -> ExprRef {
    BinaryExpr::new_expr(lhs, Operator::Or, rhs)
}
