//! Resolution of user supplied row selectors into a single container operation.
//!
//! A [`Selector`] describes which rows a caller wants: a single `true`, a logical vector, 1-based
//! numeric positions (negative positions exclude rows), an engine native integer or boolean
//! array, or a lazily evaluated expression. [`resolve`] classifies the selector and produces a
//! [`Decision`] naming exactly one of the container's primitives ([`Container::slice`],
//! [`Container::take`] or [`Container::filter`]) with normalized arguments, or no operation at
//! all. [`filter_rows`] resolves and applies the decision in one step.
//!
//! [`Container::slice`]: sift_array::Container::slice
//! [`Container::take`]: sift_array::Container::take
//! [`Container::filter`]: sift_array::Container::filter

pub use decision::*;
pub use evaluator::*;
pub use head_tail::*;
pub use indices::*;
pub use options::*;
pub use recycle::*;
pub use resolve::*;
pub use selector::*;

mod decision;
mod evaluator;
mod head_tail;
mod indices;
mod options;
mod recycle;
mod resolve;
mod selector;
#[cfg(test)]
mod test_harness;
