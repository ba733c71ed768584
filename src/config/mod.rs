//! Configuration: size bounds enforced at construction time.

pub mod limits;
pub use limits::{MAX_MATRIX_SIZE, MAX_VECTOR_SIZE, SizeLimits};
