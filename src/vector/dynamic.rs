//! Bounded, heap-allocated vector with value semantics.
//!
//! `DynamicVector<T>` owns a contiguous run of `size` elements, where `size`
//! is fixed at construction and bounded by `MAX_VECTOR_SIZE` (or the bound of
//! a caller-supplied `SizeLimits`). Copies are deep: `clone` and `assign`
//! never share storage between two instances.
//!
//! # Access
//! - `v[i]` is the unchecked form: an out-of-range index panics.
//! - `at`, `at_mut` and `set` are checked and report `IndexOutOfRange`.
//!
//! # Arithmetic
//! Scalar operations (`&v + s`, `&v - s`, `&v * s`) always succeed. Binary
//! vector operations return `MResult`, failing with `SizeMismatch` when the
//! operand lengths differ: `&a + &b`, `&a - &b`, and `&a * &b` for the dot
//! product. Operands are never modified.

use crate::config::SizeLimits;
use crate::core::traits::{Element, Indexing, InnerProduct};
use crate::error::{MResult, MatrixError};
use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DynamicVector<T> {
    elements: Vec<T>,
}

impl<T> DynamicVector<T> {
    /// Adopt `elements`, checking the length against the default limits.
    pub fn from_vec(elements: Vec<T>) -> MResult<Self> {
        Self::from_vec_with_limits(elements, &SizeLimits::default())
    }

    pub fn from_vec_with_limits(elements: Vec<T>, limits: &SizeLimits) -> MResult<Self> {
        limits.check_vector(elements.len())?;
        Ok(Self { elements })
    }

    /// Build a vector of `size` elements where element `i` is `f(i)`.
    pub fn from_fn(size: usize, f: impl FnMut(usize) -> T) -> MResult<Self> {
        let size = SizeLimits::default().check_vector(size)?;
        Ok(Self::from_fn_unchecked(size, f))
    }

    /// Caller guarantees the length was already validated.
    pub(crate) fn from_vec_unchecked(elements: Vec<T>) -> Self {
        Self { elements }
    }

    pub(crate) fn from_fn_unchecked(size: usize, f: impl FnMut(usize) -> T) -> Self {
        log::trace!("allocating vector storage of {size} elements");
        Self { elements: (0..size).map(f).collect() }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Checked read access.
    pub fn at(&self, index: usize) -> MResult<&T> {
        MatrixError::ensure_in_range(index, self.size())?;
        Ok(&self.elements[index])
    }

    /// Checked write access.
    pub fn at_mut(&mut self, index: usize) -> MResult<&mut T> {
        MatrixError::ensure_in_range(index, self.size())?;
        Ok(&mut self.elements[index])
    }

    /// Checked store of `value` at `index`; the vector is untouched on failure.
    pub fn set(&mut self, index: usize, value: T) -> MResult<()> {
        *self.at_mut(index)? = value;
        Ok(())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Mutable view of the elements. The length cannot change through a slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.elements.iter_mut()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Replace this vector with a deep copy of `other`, taking on its size.
    ///
    /// The copy is fully built before the old storage is released.
    pub fn assign(&mut self, other: &Self)
    where
        T: Clone,
    {
        let fresh = other.elements.clone();
        self.elements = fresh;
    }

    pub(crate) fn map<U>(&self, f: impl FnMut(&T) -> U) -> DynamicVector<U> {
        DynamicVector { elements: self.elements.iter().map(f).collect() }
    }

    /// Element-wise combination of two vectors of equal size.
    pub(crate) fn zip_with<U>(
        &self,
        other: &Self,
        mut f: impl FnMut(&T, &T) -> U,
    ) -> MResult<DynamicVector<U>> {
        MatrixError::ensure_same_size(self.size(), other.size())?;
        Ok(DynamicVector {
            elements: self
                .elements
                .iter()
                .zip(other.elements.iter())
                .map(|(a, b)| f(a, b))
                .collect(),
        })
    }
}

impl<T: Element> DynamicVector<T> {
    /// Allocate `size` zero-valued elements.
    pub fn new(size: usize) -> MResult<Self> {
        Self::with_limits(size, &SizeLimits::default())
    }

    pub fn with_limits(size: usize, limits: &SizeLimits) -> MResult<Self> {
        let size = limits.check_vector(size)?;
        Ok(Self::zeros_unchecked(size))
    }

    pub(crate) fn zeros_unchecked(size: usize) -> Self {
        Self::from_fn_unchecked(size, |_| T::zero())
    }

    pub fn add_scalar(&self, s: T) -> Self {
        self.map(|&a| a + s)
    }

    pub fn sub_scalar(&self, s: T) -> Self {
        self.map(|&a| a - s)
    }

    pub fn mul_scalar(&self, s: T) -> Self {
        self.map(|&a| a * s)
    }

    pub fn checked_add(&self, other: &Self) -> MResult<Self> {
        self.zip_with(other, |&a, &b| a + b)
    }

    pub fn checked_sub(&self, other: &Self) -> MResult<Self> {
        self.zip_with(other, |&a, &b| a - b)
    }

    /// y ← y + alpha·x
    pub(crate) fn axpy(&mut self, alpha: T, x: &Self) -> MResult<()> {
        MatrixError::ensure_same_size(self.size(), x.size())?;
        for (yi, &xi) in self.elements.iter_mut().zip(x.elements.iter()) {
            *yi = *yi + alpha * xi;
        }
        Ok(())
    }

    /// Σ aᵢ·bᵢ, accumulated in `T`'s own arithmetic.
    pub fn dot(&self, other: &Self) -> MResult<T> {
        MatrixError::ensure_same_size(self.size(), other.size())?;
        Ok(self
            .elements
            .iter()
            .zip(other.elements.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }
}

impl<T> Indexing for DynamicVector<T> {
    fn size(&self) -> usize {
        self.elements.len()
    }
}

impl<T: Element> InnerProduct<DynamicVector<T>> for () {
    type Scalar = T;
    fn dot(&self, x: &DynamicVector<T>, y: &DynamicVector<T>) -> MResult<T> {
        x.dot(y)
    }
}

impl<T> Index<usize> for DynamicVector<T> {
    type Output = T;
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

impl<T> IndexMut<usize> for DynamicVector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.elements[index]
    }
}

impl<T> AsRef<[T]> for DynamicVector<T> {
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T> AsMut<[T]> for DynamicVector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.elements
    }
}

impl<T> TryFrom<Vec<T>> for DynamicVector<T> {
    type Error = MatrixError;
    fn try_from(elements: Vec<T>) -> MResult<Self> {
        Self::from_vec(elements)
    }
}

impl<T: Clone> TryFrom<&[T]> for DynamicVector<T> {
    type Error = MatrixError;
    fn try_from(elements: &[T]) -> MResult<Self> {
        Self::from_vec(elements.to_vec())
    }
}

impl<'a, T> IntoIterator for &'a DynamicVector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T> IntoIterator for DynamicVector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, x) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{x}")?;
        }
        Ok(())
    }
}

// Scalar operators: `&v + s`, `&v - s`, `&v * s`.
macro_rules! scalar_op {
    ($trait:ident, $method:ident, $op:ident) => {
        impl<T: Element> $trait<T> for &DynamicVector<T> {
            type Output = DynamicVector<T>;
            fn $method(self, s: T) -> DynamicVector<T> {
                self.$op(s)
            }
        }

        impl<T: Element> $trait<T> for DynamicVector<T> {
            type Output = DynamicVector<T>;
            fn $method(self, s: T) -> DynamicVector<T> {
                (&self).$op(s)
            }
        }
    };
}

scalar_op!(Add, add, add_scalar);
scalar_op!(Sub, sub, sub_scalar);
scalar_op!(Mul, mul, mul_scalar);

impl<T: Element> Add<&DynamicVector<T>> for &DynamicVector<T> {
    type Output = MResult<DynamicVector<T>>;
    fn add(self, rhs: &DynamicVector<T>) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl<T: Element> Sub<&DynamicVector<T>> for &DynamicVector<T> {
    type Output = MResult<DynamicVector<T>>;
    fn sub(self, rhs: &DynamicVector<T>) -> Self::Output {
        self.checked_sub(rhs)
    }
}

/// `&a * &b` is the dot product.
impl<T: Element> Mul<&DynamicVector<T>> for &DynamicVector<T> {
    type Output = MResult<T>;
    fn mul(self, rhs: &DynamicVector<T>) -> MResult<T> {
        self.dot(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_vector_is_zeroed() {
        let v = DynamicVector::<i32>::new(4).unwrap();
        assert_eq!(v.as_slice(), &[0, 0, 0, 0]);
    }

    #[test]
    fn set_leaves_vector_untouched_on_failure() {
        let mut v = DynamicVector::from_vec(vec![1, 2, 3]).unwrap();
        let err = v.set(3, 9).unwrap_err();
        assert_eq!(err, MatrixError::IndexOutOfRange { index: 3, size: 3 });
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        v.set(2, 9).unwrap();
        assert_eq!(v[2], 9);
    }

    #[test]
    fn from_vec_respects_limits() {
        let limits = SizeLimits::new(2, 2);
        assert!(DynamicVector::from_vec_with_limits(vec![1, 2], &limits).is_ok());
        assert_eq!(
            DynamicVector::from_vec_with_limits(vec![1, 2, 3], &limits),
            Err(MatrixError::InvalidSize { size: 3, max: 2 })
        );
        assert!(DynamicVector::<i32>::from_vec(Vec::new()).is_err());
    }

    #[test]
    fn owned_scalar_ops_match_borrowed() {
        let v = DynamicVector::from_vec(vec![1, 2, 3]).unwrap();
        assert_eq!(v.clone() * 3, &v * 3);
        assert_eq!(v.clone() - 1, v.sub_scalar(1));
    }

    #[test]
    fn display_separates_with_spaces() {
        let v = DynamicVector::from_vec(vec![1, -2, 3]).unwrap();
        assert_eq!(v.to_string(), "1 -2 3");
    }

    #[test]
    fn float_dot() {
        let a = DynamicVector::from_vec(vec![0.5, 1.5]).unwrap();
        let b = DynamicVector::from_vec(vec![2.0, 4.0]).unwrap();
        assert!((a.dot(&b).unwrap() - 7.0f64).abs() < 1e-12);
    }
}
