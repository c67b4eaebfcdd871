//! Compute kernels on top of Arrow arrays.
//!
//! The row selection kernels ([`slice`], [`take`], [`filter`]) validate their arguments and then
//! defer to `arrow-select`. Auxiliary functions such as casts and null predicates are reached by
//! name through [`call_function`].

pub use filter::filter;
pub use slice::slice;
pub use take::take;

use std::sync::Arc;

use arrow_array::cast::AsArray;
use arrow_array::types::{Float16Type, Float32Type, Float64Type};
use arrow_array::{Array, ArrayRef, BooleanArray};
use arrow_cast::CastOptions;
use arrow_schema::DataType;
use sift_error::{SiftResult, sift_bail};

pub(crate) mod filter;
pub(crate) mod slice;
pub(crate) mod take;

/// Options passed to [`call_function`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FunctionOptions {
    /// The function takes no options.
    #[default]
    None,
    /// Options for the `cast` function.
    Cast {
        /// The target type.
        to: DataType,
        /// When set, values that fail to convert become null instead of raising an error.
        safe: bool,
    },
}

impl FunctionOptions {
    /// Options for a safe cast to `to`.
    pub fn cast(to: DataType) -> Self {
        Self::Cast { to, safe: true }
    }
}

/// Invoke a compute function by name.
///
/// Supported functions are `cast`, `is_null`, `is_valid` and `is_nan`. Each takes exactly one
/// array argument.
pub fn call_function(
    name: &str,
    args: &[ArrayRef],
    options: &FunctionOptions,
) -> SiftResult<ArrayRef> {
    let array = match args {
        [array] => array,
        _ => sift_bail!("{} expects exactly one argument, got {}", name, args.len()),
    };

    match name {
        "cast" => match options {
            FunctionOptions::Cast { to, safe } => cast(array, to, *safe),
            FunctionOptions::None => sift_bail!("cast requires FunctionOptions::Cast"),
        },
        "is_null" => Ok(Arc::new(arrow_arith::boolean::is_null(array.as_ref())?)),
        "is_valid" => Ok(Arc::new(arrow_arith::boolean::is_not_null(array.as_ref())?)),
        "is_nan" => is_nan(array),
        _ => sift_bail!(NotImplemented: name.to_string(), "call_function"),
    }
}

fn cast(array: &ArrayRef, to: &DataType, safe: bool) -> SiftResult<ArrayRef> {
    if array.data_type() == to {
        return Ok(array.clone());
    }

    let options = CastOptions {
        safe,
        ..Default::default()
    };
    Ok(arrow_cast::cast::cast_with_options(
        array.as_ref(),
        to,
        &options,
    )?)
}

fn is_nan(array: &ArrayRef) -> SiftResult<ArrayRef> {
    let result = match array.data_type() {
        DataType::Float16 => {
            BooleanArray::from_unary(array.as_primitive::<Float16Type>(), |v| v.is_nan())
        }
        DataType::Float32 => {
            BooleanArray::from_unary(array.as_primitive::<Float32Type>(), |v| v.is_nan())
        }
        DataType::Float64 => {
            BooleanArray::from_unary(array.as_primitive::<Float64Type>(), |v| v.is_nan())
        }
        other => sift_bail!(MismatchedTypes: "floating point", other),
    };
    Ok(Arc::new(result))
}
