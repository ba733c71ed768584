//! Dense square matrix built from `DynamicVector` rows.
//!
//! A `DynamicMatrix<T>` of order N stores N independently allocated rows of
//! length N inside a `DynamicVector<DynamicVector<T>>`. Bounds checks and
//! row arithmetic are delegated to the vector type; the matrix only checks
//! that the operands have the same order and recombines the rows.
//!
//! Rows can be read as `&DynamicVector<T>`, but are only written through a
//! `RowMut` view, which cannot replace or resize a row. Every row therefore
//! keeps length N for the lifetime of the matrix.

use crate::config::SizeLimits;
use crate::core::traits::{Element, Indexing, MatVec};
use crate::error::{MResult, MatrixError};
use crate::vector::DynamicVector;
use std::fmt;
use std::ops::{Add, Deref, Index, IndexMut, Mul, Sub};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DynamicMatrix<T> {
    rows: DynamicVector<DynamicVector<T>>,
}

impl<T> DynamicMatrix<T> {
    /// Build from row-major nested vectors; every row must be as long as
    /// there are rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> MResult<Self> {
        Self::from_rows_with_limits(rows, &SizeLimits::default())
    }

    pub fn from_rows_with_limits(rows: Vec<Vec<T>>, limits: &SizeLimits) -> MResult<Self> {
        let n = limits.check_matrix(rows.len())?;
        let rows = rows
            .into_iter()
            .map(|row| {
                MatrixError::ensure_same_size(row.len(), n)?;
                Ok(DynamicVector::from_vec_unchecked(row))
            })
            .collect::<MResult<Vec<_>>>()?;
        Ok(Self { rows: DynamicVector::from_vec_unchecked(rows) })
    }

    /// Build an N×N matrix whose (i, j) entry is `f(i, j)`.
    pub fn from_fn(size: usize, f: impl FnMut(usize, usize) -> T) -> MResult<Self> {
        let n = SizeLimits::default().check_matrix(size)?;
        Ok(Self::from_fn_unchecked(n, f))
    }

    fn from_fn_unchecked(n: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self {
            rows: DynamicVector::from_fn_unchecked(n, |i| {
                DynamicVector::from_fn_unchecked(n, |j| f(i, j))
            }),
        }
    }

    /// Order of the matrix (row count == column count).
    #[inline]
    pub fn size(&self) -> usize {
        self.rows.size()
    }

    /// Checked row access.
    pub fn row(&self, i: usize) -> MResult<&DynamicVector<T>> {
        self.rows.at(i)
    }

    /// Checked mutable row access through a fixed-length view.
    pub fn row_mut(&mut self, i: usize) -> MResult<RowMut<'_, T>> {
        Ok(RowMut { row: self.rows.at_mut(i)? })
    }

    /// Checked element access: row `i`, then column `j`.
    pub fn get(&self, i: usize, j: usize) -> MResult<&T> {
        self.row(i)?.at(j)
    }

    pub fn set(&mut self, i: usize, j: usize, value: T) -> MResult<()> {
        self.rows.at_mut(i)?.set(j, value)
    }

    pub fn rows(&self) -> std::slice::Iter<'_, DynamicVector<T>> {
        self.rows.iter()
    }

    /// Replace this matrix with a deep copy of `other`, taking on its order.
    pub fn assign(&mut self, other: &Self)
    where
        T: Clone,
    {
        let fresh = other.rows.clone();
        self.rows = fresh;
    }

    /// Combine corresponding rows of two matrices of equal order.
    fn row_wise(
        &self,
        other: &Self,
        f: impl Fn(&DynamicVector<T>, &DynamicVector<T>) -> MResult<DynamicVector<T>>,
    ) -> MResult<Self> {
        MatrixError::ensure_same_size(self.size(), other.size())?;
        let rows = self
            .rows
            .iter()
            .zip(other.rows.iter())
            .map(|(a, b)| f(a, b))
            .collect::<MResult<Vec<_>>>()?;
        Ok(Self { rows: DynamicVector::from_vec_unchecked(rows) })
    }
}

impl<T: Element> DynamicMatrix<T> {
    /// Allocate an N×N zero matrix.
    pub fn new(size: usize) -> MResult<Self> {
        Self::with_limits(size, &SizeLimits::default())
    }

    pub fn with_limits(size: usize, limits: &SizeLimits) -> MResult<Self> {
        let n = limits.check_matrix(size)?;
        Ok(Self { rows: DynamicVector::from_fn_unchecked(n, |_| DynamicVector::zeros_unchecked(n)) })
    }

    pub fn identity(size: usize) -> MResult<Self> {
        Self::from_fn(size, |i, j| if i == j { T::one() } else { T::zero() })
    }

    pub fn checked_add(&self, other: &Self) -> MResult<Self> {
        self.row_wise(other, DynamicVector::checked_add)
    }

    pub fn checked_sub(&self, other: &Self) -> MResult<Self> {
        self.row_wise(other, DynamicVector::checked_sub)
    }

    /// Matrix product: row i of the result is Σ_k a[i][k] · b[k].
    pub fn checked_mul(&self, other: &Self) -> MResult<Self> {
        MatrixError::ensure_same_size(self.size(), other.size())?;
        let n = self.size();
        let rows = self
            .rows
            .iter()
            .map(|a_row| {
                let mut acc = DynamicVector::zeros_unchecked(n);
                for (&a_ik, b_row) in a_row.iter().zip(other.rows.iter()) {
                    acc.axpy(a_ik, b_row)?;
                }
                Ok(acc)
            })
            .collect::<MResult<Vec<_>>>()?;
        Ok(Self { rows: DynamicVector::from_vec_unchecked(rows) })
    }

    pub fn mul_scalar(&self, s: T) -> Self {
        Self { rows: self.rows.map(|row| row.mul_scalar(s)) }
    }

    /// Matrix × column vector.
    pub fn mul_vector(&self, x: &DynamicVector<T>) -> MResult<DynamicVector<T>> {
        MatrixError::ensure_same_size(self.size(), x.size())?;
        let y = self.rows.iter().map(|row| row.dot(x)).collect::<MResult<Vec<_>>>()?;
        Ok(DynamicVector::from_vec_unchecked(y))
    }

    pub fn transpose(&self) -> Self {
        Self::from_fn_unchecked(self.size(), |i, j| self.rows[j][i])
    }
}

impl<T> Indexing for DynamicMatrix<T> {
    fn size(&self) -> usize {
        self.rows.size()
    }
}

impl<T: Element> MatVec<DynamicVector<T>> for DynamicMatrix<T> {
    fn matvec(&self, x: &DynamicVector<T>, y: &mut DynamicVector<T>) -> MResult<()> {
        MatrixError::ensure_same_size(self.size(), y.size())?;
        let ax = self.mul_vector(x)?;
        y.as_mut_slice().copy_from_slice(ax.as_slice());
        Ok(())
    }
}

/// Unchecked row access; panics when `i` is out of range.
impl<T> Index<usize> for DynamicMatrix<T> {
    type Output = DynamicVector<T>;
    #[inline]
    fn index(&self, i: usize) -> &DynamicVector<T> {
        &self.rows[i]
    }
}

impl<T> Index<(usize, usize)> for DynamicMatrix<T> {
    type Output = T;
    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.rows[i][j]
    }
}

impl<T> IndexMut<(usize, usize)> for DynamicMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.rows[i][j]
    }
}

impl<T: fmt::Display> fmt::Display for DynamicMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}

impl<T: Element> Add<&DynamicMatrix<T>> for &DynamicMatrix<T> {
    type Output = MResult<DynamicMatrix<T>>;
    fn add(self, rhs: &DynamicMatrix<T>) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl<T: Element> Sub<&DynamicMatrix<T>> for &DynamicMatrix<T> {
    type Output = MResult<DynamicMatrix<T>>;
    fn sub(self, rhs: &DynamicMatrix<T>) -> Self::Output {
        self.checked_sub(rhs)
    }
}

impl<T: Element> Mul<&DynamicMatrix<T>> for &DynamicMatrix<T> {
    type Output = MResult<DynamicMatrix<T>>;
    fn mul(self, rhs: &DynamicMatrix<T>) -> Self::Output {
        self.checked_mul(rhs)
    }
}

impl<T: Element> Mul<&DynamicVector<T>> for &DynamicMatrix<T> {
    type Output = MResult<DynamicVector<T>>;
    fn mul(self, rhs: &DynamicVector<T>) -> Self::Output {
        self.mul_vector(rhs)
    }
}

impl<T: Element> Mul<T> for &DynamicMatrix<T> {
    type Output = DynamicMatrix<T>;
    fn mul(self, s: T) -> DynamicMatrix<T> {
        self.mul_scalar(s)
    }
}

/// Mutable view of one matrix row.
///
/// Elements can be read and written, but the row itself cannot be replaced,
/// so its length always matches the matrix order.
pub struct RowMut<'a, T> {
    row: &'a mut DynamicVector<T>,
}

impl<T> RowMut<'_, T> {
    pub fn at_mut(&mut self, j: usize) -> MResult<&mut T> {
        self.row.at_mut(j)
    }

    pub fn set(&mut self, j: usize, value: T) -> MResult<()> {
        self.row.set(j, value)
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.row.as_mut_slice()
    }

    /// Overwrite the whole row; `values` must have the row's length.
    pub fn copy_from_slice(&mut self, values: &[T]) -> MResult<()>
    where
        T: Copy,
    {
        MatrixError::ensure_same_size(self.row.size(), values.len())?;
        self.row.as_mut_slice().copy_from_slice(values);
        Ok(())
    }
}

impl<T> Deref for RowMut<'_, T> {
    type Target = DynamicVector<T>;
    fn deref(&self) -> &DynamicVector<T> {
        &*self.row
    }
}

impl<T> Index<usize> for RowMut<'_, T> {
    type Output = T;
    fn index(&self, j: usize) -> &T {
        &self.row[j]
    }
}

impl<T> IndexMut<usize> for RowMut<'_, T> {
    fn index_mut(&mut self, j: usize) -> &mut T {
        &mut self.row[j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_neutral_for_mul() {
        let m = DynamicMatrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
        let id = DynamicMatrix::identity(3).unwrap();
        assert_eq!(m.checked_mul(&id).unwrap(), m);
        assert_eq!(id.checked_mul(&m).unwrap(), m);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = DynamicMatrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(err, MatrixError::SizeMismatch { left: 1, right: 2 });
        assert!(DynamicMatrix::<i32>::from_rows(Vec::new()).is_err());
    }

    #[test]
    fn row_mut_writes_through() {
        let mut m = DynamicMatrix::<i64>::new(2).unwrap();
        {
            let mut r = m.row_mut(1).unwrap();
            r.set(0, 7).unwrap();
            r[1] = 8;
            assert_eq!(r.size(), 2);
            assert!(r.set(2, 0).is_err());
        }
        assert_eq!(m[1].as_slice(), &[7, 8]);
        assert!(m.row_mut(2).is_err());
    }

    #[test]
    fn row_copy_from_slice_checks_length() {
        let mut m = DynamicMatrix::<i32>::new(3).unwrap();
        let mut r = m.row_mut(0).unwrap();
        assert!(r.copy_from_slice(&[1, 2]).is_err());
        r.copy_from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(m.row(0).unwrap().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn transpose_swaps_indices() {
        let m = DynamicMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let t = m.transpose();
        assert_eq!(t, DynamicMatrix::from_rows(vec![vec![1, 3], vec![2, 4]]).unwrap());
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn matvec_checks_output_length() {
        let m = DynamicMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let x = DynamicVector::from_vec(vec![1, 1]).unwrap();
        let mut y = DynamicVector::new(2).unwrap();
        m.matvec(&x, &mut y).unwrap();
        assert_eq!(y.as_slice(), &[3, 7]);
        let mut short = DynamicVector::new(1).unwrap();
        assert!(m.matvec(&x, &mut short).is_err());
    }

    #[test]
    fn display_puts_rows_on_lines() {
        let m = DynamicMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.to_string(), "1 2\n3 4");
    }
}
