use sift_array::Container;
use sift_error::SiftResult;

use crate::Decision;

/// The number of rows [`head`] and [`tail`] callers typically ask for.
pub const DEFAULT_HEAD_TAIL_ROWS: i64 = 6;

/// The first `n` rows of `container`.
///
/// A negative `n` keeps all but the last `|n|` rows. The container is returned unchanged when
/// every row would be kept.
pub fn head<C: Container>(container: &C, n: i64) -> SiftResult<C> {
    head_decision(container.row_count(), n).apply(container)
}

/// The last `n` rows of `container`.
///
/// A negative `n` keeps all but the first `|n|` rows. The container is returned unchanged when
/// every row would be kept.
pub fn tail<C: Container>(container: &C, n: i64) -> SiftResult<C> {
    tail_decision(container.row_count(), n).apply(container)
}

pub fn head_decision(row_count: usize, n: i64) -> Decision {
    let count = clamp_count(row_count, n);
    if count == row_count {
        return Decision::NoOp;
    }
    Decision::Slice {
        offset: 0,
        length: count,
    }
}

pub fn tail_decision(row_count: usize, n: i64) -> Decision {
    let count = clamp_count(row_count, n);
    if count == row_count {
        return Decision::NoOp;
    }
    Decision::Slice {
        offset: row_count - count,
        length: count,
    }
}

/// Number of rows kept for a requested count, clamped to `[0, row_count]`.
fn clamp_count(row_count: usize, n: i64) -> usize {
    let magnitude = usize::try_from(n.unsigned_abs())
        .unwrap_or(usize::MAX)
        .min(row_count);
    if n < 0 {
        row_count - magnitude
    } else {
        magnitude
    }
}
