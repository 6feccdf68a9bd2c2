// RustSparse: terminal monoid reduction for GraphBLAS-style sparse matrices
//
// Reduces the stored entries of a sparse matrix or vector to one value with a
// monoid. A monoid may carry a terminal value; the reduction stops as soon as
// the running value equals it.
//
// Architecture:
// - Layer 1 (api): integer handles with runtime type checks
// - Layer 2 (core): monoids, operators, and sparse containers
// - Layer 3 (types): Type system bridging runtime and compile-time types
// - ops: the reduction engine and its descriptor
// - io: Matrix Market input for the command-line adapter

// Public modules
pub mod api;
pub mod core;
pub mod io;
pub mod ops;
pub mod types;

// Re-export commonly used items for convenience
pub use self::core::{BinaryOp, ErrorKind, GraphBlasError, Matrix, Monoid, Result, StoredEntries, Vector};
pub use ops::{reduce, Descriptor, Reduction};
pub use types::{GraphBLASType, TypeCode};
