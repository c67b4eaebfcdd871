use arrow_array::cast::AsArray;
use arrow_array::{Array, ArrayRef, BooleanArray};
use arrow_schema::DataType;
use sift_array::{Container, Indices};
use sift_error::{SiftResult, sift_bail, sift_err};

use crate::{
    Decision, Evaluator, ScopeEvaluator, SelectOptions, Selector, complement, is_sliceable, recycle,
};

/// Decide which single container operation selects the rows described by `selector`.
///
/// Lazy selectors are evaluated against the container's scope.
///
/// # Errors
///
/// Fails with [`SiftError::MixedSign`](sift_error::SiftError::MixedSign) when numeric positions
/// mix positive and negative values, and with
/// [`SiftError::InvalidSelector`](sift_error::SiftError::InvalidSelector) when the selector is of
/// an unsupported class or array type.
pub fn resolve<C: Container>(
    container: &C,
    selector: Selector,
    options: &SelectOptions,
) -> SiftResult<Decision> {
    resolve_with(container, selector, options, &ScopeEvaluator::new(container))
}

/// Like [`resolve`], forcing lazy selectors through `evaluator`.
///
/// The evaluator is invoked at most once.
pub fn resolve_with<C: Container>(
    container: &C,
    selector: Selector,
    options: &SelectOptions,
    evaluator: &dyn Evaluator,
) -> SiftResult<Decision> {
    let selector = match selector {
        Selector::Lazy(expr) => evaluator.evaluate(&expr)?,
        selector => selector,
    };

    let row_count = container.row_count();
    log::trace!(
        "Resolving {} selector over {} rows",
        selector.class_name(),
        row_count
    );

    let decision = match selector {
        Selector::AllTrue => Decision::NoOp,
        Selector::Bools(mask) => Decision::Filter {
            mask: BooleanArray::from(recycle(&mask, row_count)),
            keep_na: options.keep_na,
        },
        Selector::Numeric(indices) => resolve_numeric(indices, row_count)?,
        Selector::Array(array) => resolve_array(array, options)?,
        other => sift_bail!(InvalidSelector: "an object of class {}", other.class_name()),
    };

    log::debug!("Resolved row selection over {row_count} rows to {decision}");
    Ok(decision)
}

/// Resolve and apply a selector, issuing at most one engine call against `container`.
pub fn filter_rows<C: Container>(
    container: &C,
    selector: impl Into<Selector>,
    options: &SelectOptions,
) -> SiftResult<C> {
    resolve(container, selector.into(), options)?.apply(container)
}

fn resolve_numeric(indices: Vec<i64>, row_count: usize) -> SiftResult<Decision> {
    let indices = if !indices.is_empty() && indices.iter().all(|&i| i < 0) {
        complement(&indices, row_count)
    } else {
        indices
    };

    if is_sliceable(&indices) {
        if let Some(&first) = indices.first() {
            let offset = usize::try_from(first - 1)
                .map_err(|_| sift_err!("row {} does not fit in a usize offset", first))?;
            return Ok(Decision::Slice {
                offset,
                length: indices.len(),
            });
        }
    }

    if indices.iter().all(|&i| i > 0) {
        return Ok(Decision::Take(Indices::Positions(
            indices.into_iter().map(|i| i - 1).collect(),
        )));
    }

    sift_bail!(MixedSign)
}

/// Native integer arrays are already 0-based and are handed to take without adjustment.
fn resolve_array(array: ArrayRef, options: &SelectOptions) -> SiftResult<Decision> {
    let data_type = array.data_type().clone();
    match &data_type {
        DataType::Boolean => Ok(Decision::Filter {
            mask: array.as_boolean().clone(),
            keep_na: options.keep_na,
        }),
        dt if dt.is_integer() => Ok(Decision::Take(Indices::Array(array))),
        other => sift_bail!(InvalidSelector: "an Array of type {}", other),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arrow_array::{Int32Array, StringArray, UInt8Array};
    use rstest::rstest;
    use sift_error::SiftError;
    use sift_expr::{gt, ident, lit};

    use super::*;
    use crate::test_harness::{CountingEvaluator, RecordingContainer};

    fn resolve_default(rows: usize, selector: impl Into<Selector>) -> SiftResult<Decision> {
        resolve(
            &RecordingContainer::new(rows),
            selector.into(),
            &SelectOptions::default(),
        )
    }

    fn slice(offset: usize, length: usize) -> Decision {
        Decision::Slice { offset, length }
    }

    fn take(positions: Vec<i64>) -> Decision {
        Decision::Take(Indices::Positions(positions))
    }

    #[test]
    fn all_true_issues_no_engine_call() {
        let container = RecordingContainer::new(5);
        let result = filter_rows(&container, true, &SelectOptions::default()).unwrap();
        assert_eq!(result.row_count(), 5);
        assert!(container.calls().is_empty());

        let again = filter_rows(&result, true, &SelectOptions::default()).unwrap();
        assert_eq!(again.row_count(), 5);
        assert!(container.calls().is_empty());
    }

    #[test]
    fn mask_is_recycled_to_row_count() {
        let decision = resolve_default(5, vec![true, false]).unwrap();
        assert_eq!(
            decision,
            Decision::Filter {
                mask: BooleanArray::from(vec![true, false, true, false, true]),
                keep_na: true,
            }
        );
    }

    #[test]
    fn longer_mask_is_truncated() {
        let decision = resolve_default(2, vec![false, true, true]).unwrap();
        assert_eq!(
            decision,
            Decision::Filter {
                mask: BooleanArray::from(vec![false, true]),
                keep_na: true,
            }
        );
    }

    #[test]
    fn keep_na_is_passed_through() {
        let options = SelectOptions::default().with_keep_na(false);
        let decision = resolve(
            &RecordingContainer::new(3),
            Selector::from(vec![Some(true), None]),
            &options,
        )
        .unwrap();
        assert_eq!(
            decision,
            Decision::Filter {
                mask: BooleanArray::from(vec![Some(true), None, Some(true)]),
                keep_na: false,
            }
        );
    }

    #[rstest]
    #[case(10, vec![2, 3, 4], slice(1, 3))]
    #[case(10, vec![3], slice(2, 1))]
    #[case(10, vec![1], slice(0, 1))]
    #[case(10, vec![1, 3], take(vec![0, 2]))]
    #[case(10, vec![3, 2, 1], take(vec![2, 1, 0]))]
    #[case(10, vec![2, 2], take(vec![1, 1]))]
    #[case(5, vec![-2], take(vec![0, 2, 3, 4]))]
    #[case(5, vec![-1], slice(1, 4))]
    #[case(5, vec![-5], slice(0, 4))]
    #[case(5, vec![-9], slice(0, 5))]
    #[case(5, vec![-1, -2, -3, -4, -5], take(vec![]))]
    #[case(5, vec![], take(vec![]))]
    #[case(0, vec![], take(vec![]))]
    fn numeric_selection(#[case] rows: usize, #[case] indices: Vec<i64>, #[case] expected: Decision) {
        assert_eq!(resolve_default(rows, indices).unwrap(), expected);
    }

    #[rstest]
    #[case(vec![1, -2])]
    #[case(vec![-1, 2, 3])]
    #[case(vec![0])]
    #[case(vec![-1, 0])]
    fn mixed_signs(#[case] indices: Vec<i64>) {
        assert!(matches!(
            resolve_default(5, indices),
            Err(SiftError::MixedSign(..))
        ));
    }

    #[test]
    fn native_integer_indices_are_already_zero_based() {
        let indices: ArrayRef = Arc::new(UInt8Array::from(vec![1, 3]));
        let decision = resolve_default(5, indices.clone()).unwrap();
        assert_eq!(decision, Decision::Take(Indices::Array(indices)));

        // The same positions as numbers are 1-based and are shifted down by one.
        assert_eq!(resolve_default(5, vec![1, 3]).unwrap(), take(vec![0, 2]));
    }

    #[test]
    fn native_boolean_mask_is_not_recycled() {
        let mask = BooleanArray::from(vec![Some(true), None]);
        let decision = resolve_default(5, mask.clone()).unwrap();
        assert_eq!(
            decision,
            Decision::Filter {
                mask,
                keep_na: true
            }
        );
    }

    #[test]
    fn unsupported_array_type() {
        let array: ArrayRef = Arc::new(StringArray::from(vec!["a"]));
        let err = resolve_default(1, array).unwrap_err();
        assert!(matches!(err, SiftError::InvalidSelector(..)));
        assert!(
            err.to_string()
                .starts_with("Cannot extract rows with an Array of type Utf8")
        );
    }

    #[test]
    fn unsupported_class() {
        let err = resolve_default(1, Selector::unsupported("character")).unwrap_err();
        assert!(
            err.to_string()
                .starts_with("Cannot extract rows with an object of class character")
        );
    }

    #[test]
    fn lazy_predicate_is_evaluated_against_scope() {
        let decision = resolve_default(5, gt(ident(), lit(3i64))).unwrap();
        assert_eq!(
            decision,
            Decision::Filter {
                mask: BooleanArray::from(vec![false, false, false, true, true]),
                keep_na: true,
            }
        );
    }

    #[test]
    fn lazy_integer_result_is_taken_without_offset() {
        let decision = resolve_default(3, ident()).unwrap();
        let expected: ArrayRef = Arc::new(arrow_array::Int64Array::from(vec![1, 2, 3]));
        assert_eq!(decision, Decision::Take(Indices::Array(expected)));
    }

    #[test]
    fn lazy_predicate_is_evaluated_once() {
        let evaluator = CountingEvaluator::new(Selector::from(vec![2i64, 3]));
        let decision = resolve_with(
            &RecordingContainer::new(5),
            Selector::Lazy(ident()),
            &SelectOptions::default(),
            &evaluator,
        )
        .unwrap();
        assert_eq!(decision, slice(1, 2));
        assert_eq!(evaluator.count(), 1);
    }

    #[test]
    fn lazy_result_is_classified_like_any_selector() {
        let evaluator = CountingEvaluator::new(Selector::AllTrue);
        let container = RecordingContainer::new(5);
        let decision = resolve_with(
            &container,
            Selector::Lazy(ident()),
            &SelectOptions::default(),
            &evaluator,
        )
        .unwrap();
        assert_eq!(decision, Decision::NoOp);
    }

    #[test]
    fn lazy_result_must_not_be_lazy() {
        let evaluator = CountingEvaluator::new(Selector::Lazy(ident()));
        let err = resolve_with(
            &RecordingContainer::new(5),
            Selector::Lazy(ident()),
            &SelectOptions::default(),
            &evaluator,
        )
        .unwrap_err();
        assert!(
            err.to_string()
                .starts_with("Cannot extract rows with an object of class expression")
        );
        assert_eq!(evaluator.count(), 1);
    }

    #[test]
    fn evaluation_errors_propagate() {
        let scope_mismatch = gt(sift_expr::col("missing"), lit(1));
        assert!(resolve_default(3, scope_mismatch).is_err());
    }

    #[rstest]
    #[case(Selector::from(vec![true, false]), "filter(5, true)")]
    #[case(Selector::from(vec![2i64, 3]), "slice(1, 2)")]
    #[case(Selector::from(vec![1i64, 5]), "take(positions(len=2))")]
    #[case(
        Selector::from(Arc::new(Int32Array::from(vec![0])) as ArrayRef),
        "take(Int32(len=1))"
    )]
    fn exactly_one_engine_call(#[case] selector: Selector, #[case] call: &str) {
        let container = RecordingContainer::new(5);
        filter_rows(&container, selector, &SelectOptions::default()).unwrap();
        assert_eq!(container.calls(), vec![call.to_string()]);
    }

    #[test]
    fn failed_resolution_issues_no_engine_call() {
        let container = RecordingContainer::new(5);
        assert!(filter_rows(&container, vec![1i64, -1], &SelectOptions::default()).is_err());
        assert!(container.calls().is_empty());
    }
}
