// Core Layer: Vector implementation

use crate::core::container::{SparseContainer, StoredEntries};
use crate::core::error::Result;
use crate::types::{GraphBLASType, TypeCode};

/// Sparse vector, stored as an n×1 matrix
#[derive(Debug, Clone)]
pub struct Vector<T: GraphBLASType>(SparseContainer<T>);

impl<T: GraphBLASType> Vector<T> {
    /// Create a new empty vector
    pub fn new(size: usize) -> Result<Self> {
        Ok(Vector(SparseContainer::new_vector(size)?))
    }

    /// Create a vector from parallel index and value arrays
    pub fn from_entries(size: usize, indices: Vec<usize>, values: Vec<T>) -> Result<Self> {
        let cols = vec![0; indices.len()];
        Ok(Vector(SparseContainer::from_coo(
            size, 1, indices, cols, values,
        )?))
    }

    /// Get size
    pub fn size(&self) -> usize {
        self.0.nrows()
    }

    /// Get number of stored values
    pub fn nvals(&self) -> usize {
        self.0.nvals()
    }

    /// Get type code
    pub fn type_code(&self) -> TypeCode {
        self.0.type_code()
    }

    /// Get values slice
    pub fn values(&self) -> &[T] {
        self.0.values()
    }
}

impl<T: GraphBLASType> StoredEntries<T> for Vector<T> {
    type Values<'a> = <SparseContainer<T> as StoredEntries<T>>::Values<'a>;

    fn stored_values(&self) -> Self::Values<'_> {
        self.0.stored_values()
    }

    fn nvals(&self) -> usize {
        self.0.nvals()
    }

    fn type_code(&self) -> TypeCode {
        self.0.type_code()
    }
}
