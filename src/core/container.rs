// Core Layer: Unified Sparse Container
//
// Internal representation shared by Matrix, Vector, and Scalar types.
// Following SuiteSparse design: vectors are n×1 matrices, scalars are 1×1 matrices.

use crate::core::error::{GraphBlasError, Result};
use crate::core::matrix::SparseStorage;
use crate::types::{GraphBLASType, TypeCode};

/// Read-only enumeration of the explicitly stored values of a sparse object
///
/// Absent entries are never produced. Enumeration order is the storage
/// order of the implementor and carries no meaning beyond that; callers
/// must not rely on it being stable across calls.
pub trait StoredEntries<T: GraphBLASType> {
    /// Iterator over stored values
    type Values<'a>: Iterator<Item = T>
    where
        Self: 'a;

    /// Enumerate stored values lazily
    fn stored_values(&self) -> Self::Values<'_>;

    /// Number of stored values
    fn nvals(&self) -> usize;

    /// Runtime type code of the stored values
    fn type_code(&self) -> TypeCode {
        T::TYPE_CODE
    }
}

impl<T: GraphBLASType> StoredEntries<T> for [T] {
    type Values<'a> = std::iter::Copied<std::slice::Iter<'a, T>>;

    fn stored_values(&self) -> Self::Values<'_> {
        self.iter().copied()
    }

    fn nvals(&self) -> usize {
        self.len()
    }
}

/// Unified sparse container for matrices, vectors, and scalars
///
/// This is the internal representation. Externally, Matrix<T>, Vector<T>, and Scalar<T>
/// wrap this type to provide ergonomic APIs while sharing implementation.
///
/// Design invariants:
/// - Matrix: arbitrary (nrows, ncols)
/// - Vector: (nrows, 1) where nrows is the vector size
/// - Scalar: (1, 1)
/// - Every stored index lies inside the shape
#[derive(Debug, Clone)]
pub struct SparseContainer<T: GraphBLASType> {
    /// Shape: (number of rows, number of columns)
    shape: (usize, usize),
    /// Element type code
    type_code: TypeCode,
    /// Sparse storage format
    storage: SparseStorage<T>,
}

impl<T: GraphBLASType> SparseContainer<T> {
    fn empty(nrows: usize, ncols: usize) -> Self {
        Self {
            shape: (nrows, ncols),
            type_code: T::TYPE_CODE,
            storage: SparseStorage::COO {
                row_indices: Vec::new(),
                col_indices: Vec::new(),
                values: Vec::new(),
            },
        }
    }

    /// Create a new container for a matrix
    pub fn new_matrix(nrows: usize, ncols: usize) -> Result<Self> {
        Ok(Self::empty(nrows, ncols))
    }

    /// Create a new container for a vector (n×1 matrix)
    pub fn new_vector(size: usize) -> Result<Self> {
        Ok(Self::empty(size, 1))
    }

    /// Create a new container for a scalar (1×1 matrix)
    pub fn new_scalar() -> Result<Self> {
        Ok(Self::empty(1, 1))
    }

    /// Create a container with CSR storage
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
        check_compressed(nrows, ncols, &row_ptrs, &col_indices, values.len(), false)?;
        Ok(Self {
            shape: (nrows, ncols),
            type_code: T::TYPE_CODE,
            storage: SparseStorage::CSR {
                row_ptrs,
                col_indices,
                values,
            },
        })
    }

    /// Create a container with CSC storage
    pub fn from_csc(
        nrows: usize,
        ncols: usize,
        col_ptrs: Vec<usize>,
        row_indices: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self> {
        check_compressed(ncols, nrows, &col_ptrs, &row_indices, values.len(), true)?;
        Ok(Self {
            shape: (nrows, ncols),
            type_code: T::TYPE_CODE,
            storage: SparseStorage::CSC {
                col_ptrs,
                row_indices,
                values,
            },
        })
    }

    /// Create a container with COO storage
    pub fn from_coo(
        nrows: usize,
        ncols: usize,
        row_indices: Vec<usize>,
        col_indices: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self> {
        if row_indices.len() != values.len() || col_indices.len() != values.len() {
            return Err(GraphBlasError::DimensionMismatch(format!(
                "{} row indices, {} column indices, {} values",
                row_indices.len(),
                col_indices.len(),
                values.len()
            )));
        }
        for (&row, &col) in row_indices.iter().zip(&col_indices) {
            check_bounds(row, col, nrows, ncols)?;
        }
        Ok(Self {
            shape: (nrows, ncols),
            type_code: T::TYPE_CODE,
            storage: SparseStorage::COO {
                row_indices,
                col_indices,
                values,
            },
        })
    }

    /// Check if this container represents a scalar (1×1)
    pub fn is_scalar(&self) -> bool {
        self.shape == (1, 1)
    }

    /// Get number of rows
    pub fn nrows(&self) -> usize {
        self.shape.0
    }

    /// Get number of columns
    pub fn ncols(&self) -> usize {
        self.shape.1
    }

    /// Get shape as (nrows, ncols)
    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    /// Get number of stored values
    pub fn nvals(&self) -> usize {
        self.values().len()
    }

    /// Get type code
    pub fn type_code(&self) -> TypeCode {
        self.type_code
    }

    /// Get reference to storage
    pub fn storage(&self) -> &SparseStorage<T> {
        &self.storage
    }

    /// Stored values in storage order
    pub fn values(&self) -> &[T] {
        match &self.storage {
            SparseStorage::COO { values, .. }
            | SparseStorage::CSR { values, .. }
            | SparseStorage::CSC { values, .. } => values,
        }
    }

    /// Extract scalar value
    ///
    /// For scalar containers (1×1), extracts the value if present.
    /// Returns None if not a scalar or no value is stored.
    pub fn scalar_value(&self) -> Option<T> {
        if !self.is_scalar() {
            return None;
        }
        self.values().first().copied()
    }

    /// Set scalar value
    pub fn set_scalar_value(&mut self, value: T) {
        debug_assert!(self.is_scalar(), "set_scalar_value called on non-scalar");

        // Replace storage with simple COO containing the single value
        self.storage = SparseStorage::COO {
            row_indices: vec![0],
            col_indices: vec![0],
            values: vec![value],
        };
    }

    /// Remove all stored values, keeping the shape
    pub fn clear(&mut self) {
        self.storage = Self::empty(self.shape.0, self.shape.1).storage;
    }
}

impl<T: GraphBLASType> StoredEntries<T> for SparseContainer<T> {
    type Values<'a> = std::iter::Copied<std::slice::Iter<'a, T>>;

    fn stored_values(&self) -> Self::Values<'_> {
        self.values().iter().copied()
    }

    fn nvals(&self) -> usize {
        self.values().len()
    }

    fn type_code(&self) -> TypeCode {
        self.type_code
    }
}

fn check_bounds(row: usize, col: usize, nrows: usize, ncols: usize) -> Result<()> {
    if row >= nrows || col >= ncols {
        return Err(GraphBlasError::IndexOutOfBounds {
            row,
            col,
            nrows,
            ncols,
        });
    }
    Ok(())
}

/// Validate a compressed (CSR or CSC) layout.
///
/// `nmajor` counts rows for CSR and columns for CSC; `transposed` only
/// affects how out-of-bounds indices are reported.
fn check_compressed(
    nmajor: usize,
    nminor: usize,
    ptrs: &[usize],
    indices: &[usize],
    nvals: usize,
    transposed: bool,
) -> Result<()> {
    if ptrs.len() != nmajor + 1 {
        return Err(GraphBlasError::DimensionMismatch(format!(
            "pointer array has length {}, expected {}",
            ptrs.len(),
            nmajor + 1
        )));
    }
    if indices.len() != nvals {
        return Err(GraphBlasError::DimensionMismatch(format!(
            "{} indices for {} values",
            indices.len(),
            nvals
        )));
    }
    if ptrs[0] != 0 || ptrs[nmajor] != nvals {
        return Err(GraphBlasError::InvalidIndex(format!(
            "pointer array must span [0, {}]",
            nvals
        )));
    }
    if ptrs.windows(2).any(|w| w[0] > w[1]) {
        return Err(GraphBlasError::InvalidIndex(
            "pointer array is not monotonic".to_string(),
        ));
    }
    for major in 0..nmajor {
        for &minor in &indices[ptrs[major]..ptrs[major + 1]] {
            if transposed {
                check_bounds(minor, major, nminor, nmajor)?;
            } else {
                check_bounds(major, minor, nmajor, nminor)?;
            }
        }
    }
    Ok(())
}
