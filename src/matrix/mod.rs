//! Matrix module: the dense square matrix and its mutable row view.

pub mod dense;
pub use dense::{DynamicMatrix, RowMut};
