// Core Layer: Matrix implementation
//
// Idiomatic Rust implementation of sparse matrices

use crate::core::container::{SparseContainer, StoredEntries};
use crate::core::error::Result;
use crate::types::{GraphBLASType, TypeCode};

/// Sparse matrix storage
///
/// Only explicitly stored values are represented; every other index pair
/// is absent. Stored values equal to zero are still entries.
#[derive(Debug, Clone)]
pub enum SparseStorage<T> {
    /// Compressed Sparse Row format
    CSR {
        row_ptrs: Vec<usize>,
        col_indices: Vec<usize>,
        values: Vec<T>,
    },
    /// Compressed Sparse Column format
    CSC {
        col_ptrs: Vec<usize>,
        row_indices: Vec<usize>,
        values: Vec<T>,
    },
    /// Coordinate format
    COO {
        row_indices: Vec<usize>,
        col_indices: Vec<usize>,
        values: Vec<T>,
    },
}

/// Sparse matrix wrapper around unified SparseContainer
///
/// Following SuiteSparse design: Matrix is a facade over the unified internal representation.
/// This maintains the ergonomic Matrix API while sharing implementation with Vector and Scalar.
#[derive(Debug, Clone)]
pub struct Matrix<T: GraphBLASType>(SparseContainer<T>);

impl<T: GraphBLASType> Matrix<T> {
    /// Create a new empty matrix
    pub fn new(nrows: usize, ncols: usize) -> Result<Self> {
        Ok(Matrix(SparseContainer::new_matrix(nrows, ncols)?))
    }

    /// Get number of rows
    pub fn nrows(&self) -> usize {
        self.0.nrows()
    }

    /// Get number of columns
    pub fn ncols(&self) -> usize {
        self.0.ncols()
    }

    /// Get shape as (nrows, ncols)
    pub fn shape(&self) -> (usize, usize) {
        self.0.shape()
    }

    /// Get number of stored values
    pub fn nvals(&self) -> usize {
        self.0.nvals()
    }

    /// Get type code
    pub fn type_code(&self) -> TypeCode {
        self.0.type_code()
    }

    /// Get reference to storage
    pub fn storage(&self) -> &SparseStorage<T> {
        self.0.storage()
    }

    /// Create a matrix with CSR storage
    ///
    /// # Arguments
    /// * `nrows` - Number of rows
    /// * `ncols` - Number of columns
    /// * `row_ptrs` - Row pointer array (length = nrows + 1)
    /// * `col_indices` - Column indices for each stored value
    /// * `values` - Stored values
    pub fn from_csr(
        nrows: usize,
        ncols: usize,
        row_ptrs: Vec<usize>,
        col_indices: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self> {
        Ok(Matrix(SparseContainer::from_csr(
            nrows,
            ncols,
            row_ptrs,
            col_indices,
            values,
        )?))
    }

    /// Create a matrix with CSC storage
    pub fn from_csc(
        nrows: usize,
        ncols: usize,
        col_ptrs: Vec<usize>,
        row_indices: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self> {
        Ok(Matrix(SparseContainer::from_csc(
            nrows,
            ncols,
            col_ptrs,
            row_indices,
            values,
        )?))
    }

    /// Create a matrix with COO storage
    ///
    /// Entries are kept in the order given, which is also the order a
    /// reduction visits them.
    pub fn from_coo(
        nrows: usize,
        ncols: usize,
        row_indices: Vec<usize>,
        col_indices: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self> {
        Ok(Matrix(SparseContainer::from_coo(
            nrows,
            ncols,
            row_indices,
            col_indices,
            values,
        )?))
    }
}

impl<T: GraphBLASType> StoredEntries<T> for Matrix<T> {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_matrix() {
        let m = Matrix::<f64>::new(4, 5).unwrap();
        assert_eq!(m.shape(), (4, 5));
        assert_eq!(m.nvals(), 0);
        assert_eq!(m.stored_values().count(), 0);
    }

    #[test]
    fn test_csr_stored_values() {
        // [[1, 0, 2],
        //  [0, 0, 0],
        //  [0, 3, 0]]
        let m = Matrix::<i64>::from_csr(3, 3, vec![0, 2, 2, 3], vec![0, 2, 1], vec![1, 2, 3])
            .unwrap();
        assert_eq!(m.nvals(), 3);
        assert_eq!(m.stored_values().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(m.type_code(), TypeCode::Int64);
    }

    #[test]
    fn test_stored_zero_is_an_entry() {
        let m = Matrix::<f64>::from_coo(2, 2, vec![0, 1], vec![1, 0], vec![0.0, 4.0]).unwrap();
        assert_eq!(m.nvals(), 2);
        assert_eq!(m.stored_values().collect::<Vec<_>>(), vec![0.0, 4.0]);
    }
}
