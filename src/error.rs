use thiserror::Error;

// Unified error type for tmatrix

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("invalid size {size}: must be in 1..={max}")]
    InvalidSize { size: usize, max: usize },
    #[error("index {index} out of range for size {size}")]
    IndexOutOfRange { index: usize, size: usize },
    #[error("size mismatch: {left} vs {right}")]
    SizeMismatch { left: usize, right: usize },
}

pub type MResult<T> = Result<T, MatrixError>;

impl MatrixError {
    /// Check `left == right`, logging and returning `SizeMismatch` otherwise.
    pub(crate) fn ensure_same_size(left: usize, right: usize) -> MResult<()> {
        if left != right {
            log::debug!("operand size mismatch: {left} vs {right}");
            return Err(MatrixError::SizeMismatch { left, right });
        }
        Ok(())
    }

    /// Check `index < size`, logging and returning `IndexOutOfRange` otherwise.
    pub(crate) fn ensure_in_range(index: usize, size: usize) -> MResult<()> {
        if index >= size {
            log::debug!("index {index} rejected for size {size}");
            return Err(MatrixError::IndexOutOfRange { index, size });
        }
        Ok(())
    }
}
