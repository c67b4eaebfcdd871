use arrow_array::Array;
use sift_array::Container;
use sift_error::SiftResult;
use sift_expr::ExprRef;

use crate::Selector;

/// Forces a lazy expression into a concrete [`Selector`].
pub trait Evaluator {
    fn evaluate(&self, expr: &ExprRef) -> SiftResult<Selector>;
}

/// Evaluates expressions against the scope of a container.
///
/// The result is always a [`Selector::Array`], classified by its data type during resolution.
pub struct ScopeEvaluator<'a, C> {
    container: &'a C,
}

impl<'a, C: Container> ScopeEvaluator<'a, C> {
    pub fn new(container: &'a C) -> Self {
        Self { container }
    }
}

impl<C: Container> Evaluator for ScopeEvaluator<'_, C> {
    fn evaluate(&self, expr: &ExprRef) -> SiftResult<Selector> {
        let scope = self.container.scope()?;
        let result = expr.evaluate(&scope)?;
        log::trace!(
            "Evaluated {} to a {} array of length {}",
            expr,
            result.data_type(),
            result.len()
        );
        Ok(Selector::Array(result))
    }
}
