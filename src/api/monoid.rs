// Handle Layer: monoids

use crate::api::binary_op::{lookup_monoid_op, BinaryOpHandle};
use crate::api::{define_handle, Registered};
use crate::core::error::{GraphBlasError, Result};
use crate::core::monoid::Monoid;
use crate::define_handle_registry;
use crate::types::{GraphBLASType, TypeCode};
use std::sync::Arc;
use tracing::trace;

define_handle_registry!(MONOIDS, Registered);

define_handle!(
    /// Handle to a registered monoid
    MonoidHandle
);

/// Create a monoid over `T` from a registered operator
///
/// Fails with `InvalidOperator` if `op` is null or not registered, and with
/// `TypeMismatch` if the operator is not `T × T → T`.
pub fn monoid_new<T: GraphBLASType>(op: BinaryOpHandle, identity: T) -> Result<MonoidHandle> {
    let op = lookup_monoid_op::<T>(op)?;
    monoid_register(Monoid::new((*op).clone(), identity)?)
}

/// Create a terminal monoid over `T` from a registered operator
///
/// Reductions with this monoid stop as soon as the running value is exactly
/// `terminal`. See [`Monoid`] for the exactness caveat.
pub fn monoid_terminal_new<T: GraphBLASType>(
    op: BinaryOpHandle,
    identity: T,
    terminal: T,
) -> Result<MonoidHandle> {
    let op = lookup_monoid_op::<T>(op)?;
    monoid_register(Monoid::new_terminal((*op).clone(), identity, terminal)?)
}

/// Register an already constructed monoid, such as a built-in one
pub fn monoid_register<T: GraphBLASType>(monoid: Monoid<T>) -> Result<MonoidHandle> {
    let name = monoid.name().to_string();
    let handle = MONOIDS.insert(Registered::new(T::TYPE_CODE, monoid));
    trace!(handle, name = %name, domain = %T::TYPE_CODE, "monoid registered");
    Ok(MonoidHandle(handle))
}

/// Release a monoid and null the handle
///
/// A reduction already running with this monoid keeps it alive until done.
pub fn monoid_free(handle: &mut MonoidHandle) -> Result<()> {
    if handle.is_null() {
        return Ok(());
    }
    MONOIDS.remove(handle.0)?;
    trace!(handle = handle.0, "monoid freed");
    *handle = MonoidHandle::NULL;
    Ok(())
}

/// Get the value type of a monoid
pub fn monoid_type(handle: MonoidHandle) -> Result<TypeCode> {
    Ok(entry(handle)?.domain())
}

fn entry(handle: MonoidHandle) -> Result<Arc<Registered>> {
    if handle.is_null() {
        return Err(GraphBlasError::NullMonoid);
    }
    MONOIDS.get(handle.0)
}

/// Look up a monoid, requiring its value type to be `T`
pub(crate) fn lookup_monoid<T: GraphBLASType>(handle: MonoidHandle) -> Result<Arc<Monoid<T>>> {
    entry(handle)?.downcast::<Monoid<T>>(T::TYPE_CODE)
}
