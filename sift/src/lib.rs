pub use sift_array::*;
pub use sift_select::*;
pub use {sift_error as error, sift_expr as expr};
