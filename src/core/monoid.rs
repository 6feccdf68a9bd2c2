// Core Layer: Monoid implementation

use crate::core::binary_op::BinaryOp;
use crate::core::error::Result;
use crate::types::GraphBLASType;

/// Monoid: Associative, commutative binary operation with identity element
///
/// A monoid consists of:
/// - Binary operation that is associative: (a ⊕ b) ⊕ c = a ⊕ (b ⊕ c)
///   and commutative: a ⊕ b = b ⊕ a
/// - Identity element: a ⊕ identity = identity ⊕ a = a
/// - Optional terminal element: terminal ⊕ a = terminal for every a
///
/// None of these laws are checked. A reduction with this monoid stops as
/// soon as the running value equals the terminal, so a "terminal" that does
/// not dominate yields a wrong result rather than an error.
///
/// # Exactness
///
/// The terminal is matched with `==` on `T`, never through the operator's
/// ordering. A running value that only gets close to the terminal, or
/// overshoots it, disables the early exit and the reduction visits every
/// entry. For a max monoid that is harmless; for summation-style monoids
/// under floating point, rounding can make the terminal unreachable.
#[derive(Debug, Clone)]
pub struct Monoid<T: GraphBLASType> {
    /// Binary operation
    op: BinaryOp<T>,
    /// Identity element
    identity: T,
    /// Terminal element, if any
    terminal: Option<T>,
}

impl<T: GraphBLASType> Monoid<T> {
    /// Create a new monoid without a terminal value
    pub fn new(op: BinaryOp<T>, identity: T) -> Result<Self> {
        Ok(Self {
            op,
            identity,
            terminal: None,
        })
    }

    /// Create a new monoid with a terminal value
    pub fn new_terminal(op: BinaryOp<T>, identity: T, terminal: T) -> Result<Self> {
        Ok(Self {
            op,
            identity,
            terminal: Some(terminal),
        })
    }

    /// Apply the monoid operation
    #[inline]
    pub fn apply(&self, a: T, b: T) -> T {
        self.op.apply(a, b)
    }

    /// Get identity element
    pub fn identity(&self) -> T {
        self.identity
    }

    /// Get terminal element
    pub fn terminal(&self) -> Option<T> {
        self.terminal
    }

    /// Check whether `value` is exactly the terminal
    #[inline]
    pub fn is_terminal(&self, value: T) -> bool {
        self.terminal == Some(value)
    }

    /// Get the underlying operator
    pub fn operator(&self) -> &BinaryOp<T> {
        &self.op
    }

    /// Get monoid name
    pub fn name(&self) -> &str {
        self.op.name()
    }
}

// Built-in monoids. Terminals follow the dominating element of each
// operator: the extreme value for min/max, zero for integer times.
macro_rules! impl_int_monoids {
    ($($ty:ty),*) => {
        $(
            impl Monoid<$ty> {
                /// min monoid: identity MAX, terminal MIN
                pub fn min() -> Self {
                    Self::builtin(BinaryOp::<$ty>::min(), <$ty>::MAX, Some(<$ty>::MIN))
                }

                /// max monoid: identity MIN, terminal MAX
                pub fn max() -> Self {
                    Self::builtin(BinaryOp::<$ty>::max(), <$ty>::MIN, Some(<$ty>::MAX))
                }

                /// plus monoid: identity 0, no terminal
                pub fn plus() -> Self {
                    Self::builtin(BinaryOp::<$ty>::plus(), 0, None)
                }

                /// times monoid: identity 1, terminal 0
                pub fn times() -> Self {
                    Self::builtin(BinaryOp::<$ty>::times(), 1, Some(0))
                }
            }
        )*
    };
}

// Float times has no terminal: 0 * inf and 0 * NaN are NaN, not 0.
macro_rules! impl_float_monoids {
    ($($ty:ty),*) => {
        $(
            impl Monoid<$ty> {
                /// min monoid: identity +inf, terminal -inf
                pub fn min() -> Self {
                    Self::builtin(BinaryOp::<$ty>::min(), <$ty>::INFINITY, Some(<$ty>::NEG_INFINITY))
                }

                /// max monoid: identity -inf, terminal +inf
                pub fn max() -> Self {
                    Self::builtin(BinaryOp::<$ty>::max(), <$ty>::NEG_INFINITY, Some(<$ty>::INFINITY))
                }

                /// plus monoid: identity 0, no terminal
                pub fn plus() -> Self {
                    Self::builtin(BinaryOp::<$ty>::plus(), 0.0, None)
                }

                /// times monoid: identity 1, no terminal
                pub fn times() -> Self {
                    Self::builtin(BinaryOp::<$ty>::times(), 1.0, None)
                }
            }
        )*
    };
}

impl_int_monoids!(i8, i16, i32, i64, u8, u16, u32, u64);
impl_float_monoids!(f32, f64);

impl Monoid<bool> {
    /// lor monoid: identity false, terminal true
    pub fn lor() -> Self {
        Self::builtin(BinaryOp::<bool>::lor(), false, Some(true))
    }

    /// land monoid: identity true, terminal false
    pub fn land() -> Self {
        Self::builtin(BinaryOp::<bool>::land(), true, Some(false))
    }

    /// lxor monoid: identity false, no terminal
    pub fn lxor() -> Self {
        Self::builtin(BinaryOp::<bool>::lxor(), false, None)
    }

    /// eq monoid: identity true, no terminal
    pub fn eq() -> Self {
        Self::builtin(BinaryOp::<bool>::eq(), true, None)
    }
}

impl<T: GraphBLASType> Monoid<T> {
    fn builtin(op: BinaryOp<T>, identity: T, terminal: Option<T>) -> Self {
        Self {
            op,
            identity,
            terminal,
        }
    }
}
