// Handle Layer: matrices and vectors
//
// Registered containers are immutable, which keeps them read-only for the
// whole duration of any reduction that holds them.

use crate::api::{define_handle, Registered};
use crate::core::error::{GraphBlasError, Result};
use crate::core::matrix::Matrix;
use crate::core::vector::Vector;
use crate::define_handle_registry;
use crate::types::{GraphBLASType, TypeCode};
use std::sync::Arc;
use tracing::trace;

define_handle_registry!(MATRICES, Registered);
define_handle_registry!(VECTORS, Registered);

define_handle!(
    /// Handle to a registered matrix
    MatrixHandle
);

define_handle!(
    /// Handle to a registered vector
    VectorHandle
);

/// Register an empty nrows × ncols matrix of `T`
pub fn matrix_new<T: GraphBLASType>(nrows: usize, ncols: usize) -> Result<MatrixHandle> {
    matrix_register(Matrix::<T>::new(nrows, ncols)?)
}

/// Register an existing matrix
pub fn matrix_register<T: GraphBLASType>(matrix: Matrix<T>) -> Result<MatrixHandle> {
    let (nrows, ncols) = matrix.shape();
    let nvals = matrix.nvals();
    let handle = MATRICES.insert(Registered::new(T::TYPE_CODE, matrix));
    trace!(handle, nrows, ncols, nvals, domain = %T::TYPE_CODE, "matrix registered");
    Ok(MatrixHandle(handle))
}

/// Release a matrix and null the handle
pub fn matrix_free(handle: &mut MatrixHandle) -> Result<()> {
    if handle.is_null() {
        return Ok(());
    }
    MATRICES.remove(handle.0)?;
    trace!(handle = handle.0, "matrix freed");
    *handle = MatrixHandle::NULL;
    Ok(())
}

/// Get the value type of a matrix
pub fn matrix_type(handle: MatrixHandle) -> Result<TypeCode> {
    Ok(matrix_entry(handle)?.domain())
}

pub(crate) fn matrix_entry(handle: MatrixHandle) -> Result<Arc<Registered>> {
    if handle.is_null() {
        return Err(GraphBlasError::NullMatrix);
    }
    MATRICES.get(handle.0)
}

/// Register an existing vector
pub fn vector_register<T: GraphBLASType>(vector: Vector<T>) -> Result<VectorHandle> {
    let size = vector.size();
    let handle = VECTORS.insert(Registered::new(T::TYPE_CODE, vector));
    trace!(handle, size, domain = %T::TYPE_CODE, "vector registered");
    Ok(VectorHandle(handle))
}

/// Release a vector and null the handle
pub fn vector_free(handle: &mut VectorHandle) -> Result<()> {
    if handle.is_null() {
        return Ok(());
    }
    VECTORS.remove(handle.0)?;
    trace!(handle = handle.0, "vector freed");
    *handle = VectorHandle::NULL;
    Ok(())
}

pub(crate) fn vector_entry(handle: VectorHandle) -> Result<Arc<Registered>> {
    if handle.is_null() {
        return Err(GraphBlasError::NullMatrix);
    }
    VECTORS.get(handle.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_handle_lifecycle() {
        let mut handle = matrix_new::<i16>(3, 4).unwrap();
        assert!(!handle.is_null());
        assert_eq!(matrix_type(handle).unwrap(), TypeCode::Int16);

        let raw = handle;
        matrix_free(&mut handle).unwrap();
        assert!(handle.is_null());
        assert_eq!(matrix_type(raw).unwrap_err(), GraphBlasError::UninitializedObject);

        // freeing the null handle is a no-op
        matrix_free(&mut handle).unwrap();
    }

    #[test]
    fn test_null_matrix() {
        assert_eq!(matrix_type(MatrixHandle::NULL).unwrap_err(), GraphBlasError::NullMatrix);
        assert!(vector_entry(VectorHandle::NULL).is_err());
    }

    #[test]
    fn test_vector_handle_lifecycle() {
        let v = Vector::from_entries(4, vec![1], vec![2.5f32]).unwrap();
        let mut handle = vector_register(v).unwrap();
        assert_eq!(vector_entry(handle).unwrap().domain(), TypeCode::Fp32);
        vector_free(&mut handle).unwrap();
        assert!(handle.is_null());
    }
}
