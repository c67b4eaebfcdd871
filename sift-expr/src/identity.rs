use std::fmt::Display;
use std::sync::{Arc, LazyLock};

use arrow_array::ArrayRef;
use sift_error::SiftResult;

use crate::{ExprRef, SiftExpr};

static IDENTITY: LazyLock<ExprRef> = LazyLock::new(|| Arc::new(Identity));

#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Identity;

impl Identity {
    pub fn new_expr() -> ExprRef {
        IDENTITY.clone()
    }
}

impl Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "$")
    }
}

impl SiftExpr for Identity {
    fn evaluate(&self, scope: &ArrayRef) -> SiftResult<ArrayRef> {
        Ok(scope.clone())
    }
}

// Return a global pointer to the identity token.
pub fn ident() -> ExprRef {
    Identity::new_expr()
}
