use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use arrow_array::{Array, ArrayRef, BooleanArray, Int64Array};
use sift_array::{Container, Indices};
use sift_error::SiftResult;
use sift_expr::ExprRef;

use crate::{Evaluator, Selector};

/// A container that records every engine call issued against it.
///
/// Its scope is the 1-based row numbers, so expressions such as `gt(ident(), lit(3))` select
/// rows by number.
#[derive(Debug, Clone)]
pub struct RecordingContainer {
    rows: usize,
    calls: Rc<RefCell<Vec<String>>>,
}

impl RecordingContainer {
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            calls: Rc::default(),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String, rows: usize) -> Self {
        self.calls.borrow_mut().push(call);
        Self {
            rows,
            calls: self.calls.clone(),
        }
    }
}

impl Container for RecordingContainer {
    fn row_count(&self) -> usize {
        self.rows
    }

    fn slice(&self, offset: usize, length: usize) -> SiftResult<Self> {
        Ok(self.record(format!("slice({offset}, {length})"), length))
    }

    fn take(&self, indices: &Indices) -> SiftResult<Self> {
        Ok(self.record(format!("take({indices})"), indices.len()))
    }

    fn filter(&self, mask: &BooleanArray, keep_na: bool) -> SiftResult<Self> {
        let rows = mask.true_count() + if keep_na { mask.null_count() } else { 0 };
        Ok(self.record(format!("filter({}, {keep_na})", mask.len()), rows))
    }

    fn scope(&self) -> SiftResult<ArrayRef> {
        Ok(Arc::new(Int64Array::from_iter_values((1i64..).take(self.rows))))
    }
}

/// An evaluator that returns a fixed selector and counts how often it is asked.
pub struct CountingEvaluator {
    result: Selector,
    count: Cell<usize>,
}

impl CountingEvaluator {
    pub fn new(result: Selector) -> Self {
        Self {
            result,
            count: Cell::new(0),
        }
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }
}

impl Evaluator for CountingEvaluator {
    fn evaluate(&self, _expr: &ExprRef) -> SiftResult<Selector> {
        self.count.set(self.count.get() + 1);
        Ok(self.result.clone())
    }
}
