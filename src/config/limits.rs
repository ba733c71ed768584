//! Upper bounds on container sizes.
//!
//! This module provides the `MAX_VECTOR_SIZE` and `MAX_MATRIX_SIZE` constants,
//! and the `SizeLimits` struct that carries them into constructors. Callers
//! that need tighter bounds (e.g. to reject huge allocations coming from
//! untrusted input) build their own `SizeLimits` and pass it to the
//! `with_limits` constructors.

use crate::error::{MResult, MatrixError};

/// Largest element count a `DynamicVector` may hold.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;

/// Largest row/column count a `DynamicMatrix` may have.
pub const MAX_MATRIX_SIZE: usize = 10_000;

/// Size bounds checked at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeLimits {
    /// Upper bound for vector length
    pub max_vector_size: usize,

    /// Upper bound for matrix order
    pub max_matrix_size: usize,
}

impl SizeLimits {
    pub const fn new(max_vector_size: usize, max_matrix_size: usize) -> Self {
        Self { max_vector_size, max_matrix_size }
    }

    /// Returns `size` if it is a valid vector length.
    pub fn check_vector(&self, size: usize) -> MResult<usize> {
        check(size, self.max_vector_size)
    }

    /// Returns `size` if it is a valid matrix order.
    pub fn check_matrix(&self, size: usize) -> MResult<usize> {
        check(size, self.max_matrix_size)
    }
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self::new(MAX_VECTOR_SIZE, MAX_MATRIX_SIZE)
    }
}

fn check(size: usize, max: usize) -> MResult<usize> {
    if size == 0 || size > max {
        log::debug!("rejecting size {size} (max {max})");
        return Err(MatrixError::InvalidSize { size, max });
    }
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_constants() {
        let limits = SizeLimits::default();
        assert_eq!(limits.max_vector_size, MAX_VECTOR_SIZE);
        assert_eq!(limits.max_matrix_size, MAX_MATRIX_SIZE);
    }

    #[test]
    fn bounds_are_inclusive() {
        let limits = SizeLimits::new(8, 4);
        assert_eq!(limits.check_vector(1), Ok(1));
        assert_eq!(limits.check_vector(8), Ok(8));
        assert_eq!(
            limits.check_vector(9),
            Err(MatrixError::InvalidSize { size: 9, max: 8 })
        );
        assert_eq!(limits.check_matrix(4), Ok(4));
        assert!(limits.check_matrix(5).is_err());
    }

    #[test]
    fn zero_is_rejected() {
        let limits = SizeLimits::default();
        assert_eq!(
            limits.check_vector(0),
            Err(MatrixError::InvalidSize { size: 0, max: MAX_VECTOR_SIZE })
        );
        assert!(limits.check_matrix(0).is_err());
    }
}
