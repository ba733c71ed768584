//! Core linear-algebra traits for tmatrix.

use crate::error::MResult;
use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

/// Numeric payload a vector or matrix is parameterized over.
///
/// Blanket-implemented for every type with copy semantics, equality and the
/// ring operations, so all primitive integers and floats qualify.
pub trait Element:
    Copy
    + PartialEq
    + Debug
    + num_traits::Zero
    + num_traits::One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
{
}

impl<T> Element for T where
    T: Copy
        + PartialEq
        + Debug
        + num_traits::Zero
        + num_traits::One
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
{
}

/// Uniform size query for vectors and square matrices.
pub trait Indexing {
    /// Length of a vector, or order of a square matrix.
    fn size(&self) -> usize;
}

/// Matrix–vector product: y ← A x.
pub trait MatVec<V> {
    /// Compute y = A · x. Fails when `x` or `y` do not match A's order.
    fn matvec(&self, x: &V, y: &mut V) -> MResult<()>;
}

/// Inner products.
pub trait InnerProduct<V> {
    /// Associated scalar type.
    type Scalar: Copy;
    /// Compute dot(x, y).
    fn dot(&self, x: &V, y: &V) -> MResult<Self::Scalar>;
}
