// Core Layer: Rust Implementation Module
//
// Idiomatic Rust implementations of GraphBLAS data structures

pub mod binary_op;
pub mod container;
pub mod error;
pub mod handles;
pub mod matrix;
pub mod monoid;
pub mod scalar;
pub mod vector;

// Re-export commonly used types
pub use binary_op::BinaryOp;
pub use container::StoredEntries;
pub use error::{ErrorKind, GraphBlasError, Result};
pub use handles::HandleRegistry;
pub use matrix::Matrix;
pub use monoid::Monoid;
pub use scalar::Scalar;
pub use vector::Vector;
