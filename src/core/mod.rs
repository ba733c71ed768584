//! Trait layer and faer interop.

pub mod traits;
pub mod wrappers;

pub use traits::{Element, Indexing, InnerProduct, MatVec};
