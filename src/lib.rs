//! tmatrix: bounded dynamic vectors and square matrices
//!
//! This crate provides `DynamicVector<T>` and `DynamicMatrix<T>`, value-semantic
//! containers with checked element access, deep copies, and the usual
//! element-wise and linear-algebra operators. Every fallible operation reports
//! a `MatrixError` instead of panicking; only the plain `[]` indexing panics.

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod vector;

// Re-exports for convenience
pub use config::*;
pub use self::core::*;
pub use error::*;
pub use matrix::*;
pub use vector::*;
