// Handle Layer: type-erased objects behind integer handles
//
// Callers that cannot carry Rust generics across their boundary (bindings,
// command-line adapters) hold integer handles instead of typed references.
// Each registered object keeps its runtime TypeCode, so a handle of the wrong
// type is reported as TypeMismatch instead of being misread. Handle 0 is null.

pub mod binary_op;
pub mod matrix;
pub mod monoid;
pub mod reduce;

pub use binary_op::{binary_op_free, binary_op_new, BinaryOpHandle};
pub use matrix::{
    matrix_free, matrix_new, matrix_register, matrix_type, vector_free, vector_register,
    MatrixHandle, VectorHandle,
};
pub use monoid::{
    monoid_free, monoid_new, monoid_register, monoid_terminal_new, monoid_type, MonoidHandle,
};
pub use reduce::{matrix_reduce, vector_reduce};

use crate::core::error::{GraphBlasError, Result};
use crate::types::TypeCode;
use std::any::Any;
use std::sync::Arc;

/// A registered object together with its value type
pub(crate) struct Registered {
    domain: TypeCode,
    object: Arc<dyn Any + Send + Sync>,
}

impl Registered {
    pub(crate) fn new<O: Any + Send + Sync>(domain: TypeCode, object: O) -> Self {
        Self {
            domain,
            object: Arc::new(object),
        }
    }

    pub(crate) fn domain(&self) -> TypeCode {
        self.domain
    }

    /// Recover the typed object, checking its value type first
    pub(crate) fn downcast<O: Any + Send + Sync>(&self, expected: TypeCode) -> Result<Arc<O>> {
        if self.domain != expected {
            return Err(GraphBlasError::type_mismatch(expected, self.domain));
        }
        Arc::clone(&self.object)
            .downcast::<O>()
            .map_err(|_| GraphBlasError::type_mismatch(expected, self.domain))
    }
}

macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name(usize);

        impl $name {
            /// The null handle
            pub const NULL: Self = Self(0);

            /// Check whether this is the null handle
            pub fn is_null(self) -> bool {
                self.0 == 0
            }

            /// Raw handle value
            pub fn raw(self) -> usize {
                self.0
            }
        }
    };
}

pub(crate) use define_handle;
