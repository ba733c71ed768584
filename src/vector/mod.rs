//! Vector module: the bounded dynamic vector.

pub mod dynamic;
pub use dynamic::DynamicVector;
