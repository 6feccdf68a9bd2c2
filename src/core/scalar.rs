// Core Layer: Scalar implementation

use crate::core::container::SparseContainer;
use crate::core::error::Result;
use crate::types::{GraphBLASType, TypeCode};

/// Scalar wrapper around unified SparseContainer
///
/// Following SuiteSparse design: Scalar is internally represented as a 1×1 matrix,
/// so it may hold no value at all. Reducing a source without entries into a
/// Scalar leaves it empty.
#[derive(Debug, Clone)]
pub struct Scalar<T: GraphBLASType>(SparseContainer<T>);

impl<T: GraphBLASType> Scalar<T> {
    /// Create a new empty scalar
    pub fn new() -> Result<Self> {
        Ok(Scalar(SparseContainer::new_scalar()?))
    }

    /// Create a scalar with a value
    pub fn from_value(value: T) -> Result<Self> {
        let mut container = SparseContainer::new_scalar()?;
        container.set_scalar_value(value);
        Ok(Scalar(container))
    }

    /// Set the scalar value
    pub fn set(&mut self, value: T) {
        self.0.set_scalar_value(value);
    }

    /// Get the scalar value
    pub fn get(&self) -> Option<T> {
        self.0.scalar_value()
    }

    /// Remove the value
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Check if scalar has a value
    pub fn is_empty(&self) -> bool {
        self.0.scalar_value().is_none()
    }

    /// Get type code
    pub fn type_code(&self) -> TypeCode {
        self.0.type_code()
    }

    /// Get number of stored values (0 or 1)
    pub fn nvals(&self) -> usize {
        self.0.nvals()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_lifecycle() {
        let mut s = Scalar::<i32>::new().unwrap();
        assert!(s.is_empty());
        assert_eq!(s.nvals(), 0);

        s.set(3);
        assert_eq!(s.get(), Some(3));
        assert_eq!(s.nvals(), 1);

        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.type_code(), TypeCode::Int32);
    }
}
