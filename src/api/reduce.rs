// Handle Layer: reductions

use crate::api::matrix::{matrix_entry, vector_entry, MatrixHandle, VectorHandle};
use crate::api::monoid::{lookup_monoid, monoid_type, MonoidHandle};
use crate::core::error::{GraphBlasError, Result};
use crate::core::matrix::Matrix;
use crate::core::monoid::Monoid;
use crate::core::vector::Vector;
use crate::ops::descriptor::Descriptor;
use crate::ops::reduce::{reduce, Reduction};
use crate::types::GraphBLASType;
use std::sync::Arc;

/// Reduce a registered matrix to a scalar of type `T`
///
/// Fails with `NullMonoid` or `NullMatrix` for null handles, and with
/// `TypeMismatch` when the monoid is not over `T` or the matrix entries are
/// not of the monoid's type.
pub fn matrix_reduce<T: GraphBLASType>(
    matrix: MatrixHandle,
    monoid: MonoidHandle,
    desc: Option<&Descriptor>,
) -> Result<Reduction<T>> {
    let monoid = checked_monoid::<T>(monoid, matrix.is_null())?;
    let matrix = matrix_entry(matrix)?.downcast::<Matrix<T>>(T::TYPE_CODE)?;
    reduce(&*matrix, &*monoid, desc)
}

/// Reduce a registered vector to a scalar of type `T`
pub fn vector_reduce<T: GraphBLASType>(
    vector: VectorHandle,
    monoid: MonoidHandle,
    desc: Option<&Descriptor>,
) -> Result<Reduction<T>> {
    let monoid = checked_monoid::<T>(monoid, vector.is_null())?;
    let vector = vector_entry(vector)?.downcast::<Vector<T>>(T::TYPE_CODE)?;
    reduce(&*vector, &*monoid, desc)
}

// Null handles are reported before any lookup, monoid first. Once the monoid
// is known to be over `T`, a source of another type reports the monoid's
// type as expected and the source's as found.
fn checked_monoid<T: GraphBLASType>(
    monoid: MonoidHandle,
    source_is_null: bool,
) -> Result<Arc<Monoid<T>>> {
    if monoid.is_null() {
        return Err(GraphBlasError::NullMonoid);
    }
    if source_is_null {
        return Err(GraphBlasError::NullMatrix);
    }
    let domain = monoid_type(monoid)?;
    if domain != T::TYPE_CODE {
        return Err(GraphBlasError::type_mismatch(T::TYPE_CODE, domain));
    }
    lookup_monoid::<T>(monoid)
}
