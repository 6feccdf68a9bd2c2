// Core Layer: BinaryOp implementation

use crate::core::error::Result;
use crate::types::GraphBLASType;
use std::fmt;
use std::sync::Arc;

type BinaryFn<T, U, V> = Arc<dyn Fn(T, U) -> V + Send + Sync>;

/// Binary operator: z = f(x, y)
///
/// The function is opaque to the library. Anything beyond its signature,
/// such as associativity when used in a monoid, is the caller's contract.
pub struct BinaryOp<T: GraphBLASType, U: GraphBLASType = T, V: GraphBLASType = T> {
    /// Function: (x, y) -> z
    op: BinaryFn<T, U, V>,
    /// Name of operation
    name: String,
}

impl<T: GraphBLASType, U: GraphBLASType, V: GraphBLASType> BinaryOp<T, U, V> {
    /// Create a new binary operator from a function pointer or closure
    pub fn new<F>(op: F, name: impl Into<String>) -> Result<Self>
    where
        F: Fn(T, U) -> V + Send + Sync + 'static,
    {
        Ok(Self {
            op: Arc::new(op),
            name: name.into(),
        })
    }

    /// Apply the operation
    #[inline]
    pub fn apply(&self, x: T, y: U) -> V {
        (self.op)(x, y)
    }

    /// Get operator name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T: GraphBLASType, U: GraphBLASType, V: GraphBLASType> Clone for BinaryOp<T, U, V> {
    fn clone(&self) -> Self {
        Self {
            op: Arc::clone(&self.op),
            name: self.name.clone(),
        }
    }
}

impl<T: GraphBLASType, U: GraphBLASType, V: GraphBLASType> fmt::Debug for BinaryOp<T, U, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryOp")
            .field("name", &self.name)
            .field("x", &T::TYPE_CODE)
            .field("y", &U::TYPE_CODE)
            .field("z", &V::TYPE_CODE)
            .finish()
    }
}

// Built-in operators. Integer arithmetic wraps on overflow.
macro_rules! impl_int_ops {
    ($($ty:ty),*) => {
        $(
            impl BinaryOp<$ty> {
                /// z = x + y
                pub fn plus() -> Self {
                    Self::builtin(<$ty>::wrapping_add, "plus")
                }

                /// z = x * y
                pub fn times() -> Self {
                    Self::builtin(<$ty>::wrapping_mul, "times")
                }

                /// z = min(x, y)
                pub fn min() -> Self {
                    Self::builtin(<$ty as Ord>::min, "min")
                }

                /// z = max(x, y)
                pub fn max() -> Self {
                    Self::builtin(<$ty as Ord>::max, "max")
                }
            }
        )*
    };
}

// Float min/max return the non-NaN operand when exactly one is NaN.
macro_rules! impl_float_ops {
    ($($ty:ty),*) => {
        $(
            impl BinaryOp<$ty> {
                /// z = x + y
                pub fn plus() -> Self {
                    Self::builtin(|x: $ty, y: $ty| x + y, "plus")
                }

                /// z = x * y
                pub fn times() -> Self {
                    Self::builtin(|x: $ty, y: $ty| x * y, "times")
                }

                /// z = min(x, y)
                pub fn min() -> Self {
                    Self::builtin(<$ty>::min, "min")
                }

                /// z = max(x, y)
                pub fn max() -> Self {
                    Self::builtin(<$ty>::max, "max")
                }
            }
        )*
    };
}

impl_int_ops!(i8, i16, i32, i64, u8, u16, u32, u64);
impl_float_ops!(f32, f64);

impl BinaryOp<bool> {
    /// z = x || y
    pub fn lor() -> Self {
        Self::builtin(|x, y| x || y, "lor")
    }

    /// z = x && y
    pub fn land() -> Self {
        Self::builtin(|x, y| x && y, "land")
    }

    /// z = x != y
    pub fn lxor() -> Self {
        Self::builtin(|x, y| x != y, "lxor")
    }

    /// z = x == y
    pub fn eq() -> Self {
        Self::builtin(|x, y| x == y, "eq")
    }
}

impl<T: GraphBLASType> BinaryOp<T> {
    fn builtin<F>(op: F, name: &str) -> Self
    where
        F: Fn(T, T) -> T + Send + Sync + 'static,
    {
        Self {
            op: Arc::new(op),
            name: name.to_string(),
        }
    }
}
