use std::fmt::{Display, Formatter};
use std::sync::Arc;

use arrow_array::cast::AsArray;
use arrow_array::{Array, ArrayRef, make_array};
use arrow_buffer::NullBuffer;
use sift_error::{SiftResult, sift_err};

use crate::{ExprRef, SiftExpr, ident};

#[derive(Debug, Clone)]
pub struct GetItem {
    field: Arc<str>,
    child: ExprRef,
}

impl GetItem {
    pub fn new_expr(field: impl Into<Arc<str>>, child: ExprRef) -> ExprRef {
        Arc::new(Self {
            field: field.into(),
            child,
        })
    }
}

/// Select a column of the scope by name.
pub fn col(field: impl Into<Arc<str>>) -> ExprRef {
    GetItem::new_expr(field, ident())
}

impl Display for GetItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.child, &self.field)
    }
}

impl SiftExpr for GetItem {
    fn evaluate(&self, scope: &ArrayRef) -> SiftResult<ArrayRef> {
        let child = self.child.evaluate(scope)?;
        let fields = child.as_struct_opt().ok_or_else(|| {
            sift_err!(MismatchedTypes: "struct", child.data_type())
        })?;
        let column = fields.column_by_name(&self.field).ok_or_else(|| {
            sift_err!("GetItem: no field named {} in {}", self.field, child.data_type())
        })?;

        // A null struct slot nulls the field value beneath it.
        if fields.null_count() == 0 {
            return Ok(column.clone());
        }
        let nulls = NullBuffer::union(fields.nulls(), column.nulls());
        let data = column.to_data().into_builder().nulls(nulls).build()?;
        Ok(make_array(data))
    }
}
