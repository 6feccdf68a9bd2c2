// Handle Layer: binary operators

use crate::api::{define_handle, Registered};
use crate::core::binary_op::BinaryOp;
use crate::core::error::{GraphBlasError, Result};
use crate::define_handle_registry;
use crate::types::{GraphBLASType, TypeCode};
use std::sync::Arc;
use tracing::trace;

struct OpEntry {
    x: TypeCode,
    y: TypeCode,
    op: Registered,
}

define_handle_registry!(BINARY_OPS, OpEntry);

define_handle!(
    /// Handle to a registered binary operator
    BinaryOpHandle
);

/// Register a binary operator z = f(x, y)
pub fn binary_op_new<T, U, V, F>(op: F, name: &str) -> Result<BinaryOpHandle>
where
    T: GraphBLASType,
    U: GraphBLASType,
    V: GraphBLASType,
    F: Fn(T, U) -> V + Send + Sync + 'static,
{
    let op = BinaryOp::<T, U, V>::new(op, name)?;
    let handle = BINARY_OPS.insert(OpEntry {
        x: T::TYPE_CODE,
        y: U::TYPE_CODE,
        op: Registered::new(V::TYPE_CODE, op),
    });
    trace!(handle, name, "binary operator registered");
    Ok(BinaryOpHandle(handle))
}

/// Release a binary operator and null the handle
///
/// Monoids built from the operator keep their own reference to it.
pub fn binary_op_free(handle: &mut BinaryOpHandle) -> Result<()> {
    if handle.is_null() {
        return Ok(());
    }
    BINARY_OPS.remove(handle.0)?;
    trace!(handle = handle.0, "binary operator freed");
    *handle = BinaryOpHandle::NULL;
    Ok(())
}

/// Look up an operator usable as a monoid over `T`
///
/// A null, freed, or unknown handle is an unusable operator. An operator
/// whose x, y, or z type is not `T` cannot form a monoid over `T`.
pub(crate) fn lookup_monoid_op<T: GraphBLASType>(handle: BinaryOpHandle) -> Result<Arc<BinaryOp<T>>> {
    if handle.is_null() {
        return Err(GraphBlasError::InvalidOperator(
            "operator handle is null".to_string(),
        ));
    }
    let entry = BINARY_OPS.get(handle.0).map_err(|_| {
        GraphBlasError::InvalidOperator(format!("operator handle {} is not registered", handle.0))
    })?;

    for found in [entry.x, entry.y, entry.op.domain()] {
        if found != T::TYPE_CODE {
            return Err(GraphBlasError::type_mismatch(T::TYPE_CODE, found));
        }
    }
    entry.op.downcast::<BinaryOp<T>>(T::TYPE_CODE)
}
