//! Interop between tmatrix containers and faer dense matrices.
//!
//! This module provides conversions between `DynamicMatrix<T>` and `faer::Mat<T>`,
//! and a `MatVec` implementation so a faer matrix can be applied directly to a
//! `DynamicVector<T>`. faer matrices may be rectangular; converting one into a
//! `DynamicMatrix` fails with `SizeMismatch` unless it is square.
//!
//! # Usage
//! Build or mutate data with the checked tmatrix API, then hand it to faer for
//! factorizations, or bring faer results back for comparison with `==`.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)

use crate::core::traits::{Element, MatVec};
use crate::error::{MResult, MatrixError};
use crate::matrix::DynamicMatrix;
use crate::vector::DynamicVector;
use faer::Mat;

/// Copies a `DynamicMatrix` into a freshly allocated faer matrix.
impl<T: Element> From<&DynamicMatrix<T>> for Mat<T> {
    fn from(m: &DynamicMatrix<T>) -> Self {
        let n = m.size();
        Mat::from_fn(n, n, |i, j| m[(i, j)])
    }
}

/// Copies a square faer matrix into a `DynamicMatrix`.
impl<T: Element> TryFrom<&Mat<T>> for DynamicMatrix<T> {
    type Error = MatrixError;
    fn try_from(m: &Mat<T>) -> MResult<Self> {
        MatrixError::ensure_same_size(m.nrows(), m.ncols())?;
        DynamicMatrix::from_fn(m.nrows(), |i, j| m[(i, j)])
    }
}

impl<T> From<DynamicVector<T>> for Vec<T> {
    fn from(v: DynamicVector<T>) -> Self {
        v.into_vec()
    }
}

impl<T: Clone> From<&DynamicVector<T>> for Vec<T> {
    fn from(v: &DynamicVector<T>) -> Self {
        v.as_slice().to_vec()
    }
}

/// Implements matrix-vector multiplication for `faer::Mat` acting on a `DynamicVector`.
///
/// Computes `y = A * x`; `A` may be rectangular, so `x` must have `ncols`
/// entries and `y` must have `nrows`.
impl<T: Element> MatVec<DynamicVector<T>> for Mat<T> {
    fn matvec(&self, x: &DynamicVector<T>, y: &mut DynamicVector<T>) -> MResult<()> {
        MatrixError::ensure_same_size(self.nrows(), y.size())?;
        MatrixError::ensure_same_size(self.ncols(), x.size())?;
        for i in 0..self.nrows() {
            let mut acc = T::zero();
            for j in 0..self.ncols() {
                acc = acc + self[(i, j)] * x[j];
            }
            y[i] = acc;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangular_faer_matrix_is_rejected() {
        let m = Mat::<f64>::zeros(2, 3);
        assert_eq!(
            DynamicMatrix::try_from(&m),
            Err(MatrixError::SizeMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn faer_matvec_checks_lengths() {
        let a = Mat::from_fn(2, 3, |i, j| (i * 3 + j) as f64);
        let x = DynamicVector::from_vec(vec![1.0, 1.0, 1.0]).unwrap();
        let mut y = DynamicVector::new(2).unwrap();
        a.matvec(&x, &mut y).unwrap();
        assert_eq!(y.as_slice(), &[3.0, 12.0]);
        assert!(a.matvec(&y.clone(), &mut y).is_err());
    }

    #[test]
    fn vector_into_vec() {
        let v = DynamicVector::from_vec(vec![1u8, 2, 3]).unwrap();
        let borrowed: Vec<u8> = (&v).into();
        let owned: Vec<u8> = v.into();
        assert_eq!(borrowed, owned);
    }
}
