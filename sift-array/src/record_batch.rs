use std::sync::Arc;

use arrow_array::{Array, ArrayRef, BooleanArray, RecordBatch, RecordBatchOptions, StructArray};
use arrow_schema::{Fields, Schema, SchemaRef};
use arrow_select::filter::filter_record_batch;
use sift_error::SiftResult;

use crate::compute::filter::{check_mask, emit_null_indices};
use crate::compute::slice::check_slice_bounds;
use crate::compute::take;
use crate::{Container, Indices};

impl Container for RecordBatch {
    fn row_count(&self) -> usize {
        self.num_rows()
    }

    fn slice(&self, offset: usize, length: usize) -> SiftResult<Self> {
        check_slice_bounds(self.num_rows(), offset, length)?;
        Ok(RecordBatch::slice(self, offset, length))
    }

    fn take(&self, indices: &Indices) -> SiftResult<Self> {
        take_rows(self, self.schema(), &indices.to_array())
    }

    fn filter(&self, mask: &BooleanArray, keep_na: bool) -> SiftResult<Self> {
        check_mask(self.num_rows(), mask)?;

        if keep_na && mask.null_count() > 0 {
            log::debug!(
                "Filter mask has {} null slots, emitting null rows through take",
                mask.null_count()
            );
            let schema = nullable_schema(&self.schema());
            return take_rows(self, schema, &emit_null_indices(mask));
        }

        Ok(filter_record_batch(self, mask)?)
    }

    fn scope(&self) -> SiftResult<ArrayRef> {
        Ok(Arc::new(StructArray::from(self.clone())))
    }
}

/// Take every column with the same indices, keeping the row count even for column-less batches.
fn take_rows(
    batch: &RecordBatch,
    schema: SchemaRef,
    indices: &ArrayRef,
) -> SiftResult<RecordBatch> {
    let columns = batch
        .columns()
        .iter()
        .map(|column| take(column, indices))
        .collect::<SiftResult<Vec<_>>>()?;

    let options = RecordBatchOptions::new().with_row_count(Some(indices.len()));
    Ok(RecordBatch::try_new_with_options(schema, columns, &options)?)
}

/// The same schema with every field nullable, for batches that gain null rows.
fn nullable_schema(schema: &Schema) -> SchemaRef {
    let fields = schema
        .fields()
        .iter()
        .map(|field| field.as_ref().clone().with_nullable(true))
        .collect::<Fields>();
    Arc::new(Schema::new_with_metadata(fields, schema.metadata().clone()))
}
