// High-Level Operations Module
//
// Reductions of sparse containers to a single value.

pub mod descriptor;
pub mod reduce;

// Re-exports
pub use descriptor::{Descriptor, DescriptorField, DescriptorValue};
pub use reduce::{combine_partials, reduce, reduce_to_scalar, reduce_to_value, Reduction};
