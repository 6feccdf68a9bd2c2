// Type System: Bridge between runtime type codes and compile-time generic types
//
// The handle layer stores objects type-erased, so every value type carries a
// runtime TypeCode alongside its compile-time identity:
// 1. TypeCode - Runtime enum representation
// 2. GraphBLASType trait - Compile-time type information

use std::fmt;

/// Runtime type code enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCode {
    /// Boolean type
    Bool,
    /// Signed 8-bit integer
    Int8,
    /// Signed 16-bit integer
    Int16,
    /// Signed 32-bit integer
    Int32,
    /// Signed 64-bit integer
    Int64,
    /// Unsigned 8-bit integer
    Uint8,
    /// Unsigned 16-bit integer
    Uint16,
    /// Unsigned 32-bit integer
    Uint32,
    /// Unsigned 64-bit integer
    Uint64,
    /// 32-bit floating point
    Fp32,
    /// 64-bit floating point
    Fp64,
}

impl TypeCode {
    /// Get human-readable name for this type code
    pub fn name(&self) -> &'static str {
        match self {
            TypeCode::Bool => "bool",
            TypeCode::Int8 => "int8",
            TypeCode::Int16 => "int16",
            TypeCode::Int32 => "int32",
            TypeCode::Int64 => "int64",
            TypeCode::Uint8 => "uint8",
            TypeCode::Uint16 => "uint16",
            TypeCode::Uint32 => "uint32",
            TypeCode::Uint64 => "uint64",
            TypeCode::Fp32 => "float32",
            TypeCode::Fp64 => "float64",
        }
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Trait for scalar types that can be stored in a matrix and reduced
///
/// `PartialEq` is the equality used for terminal detection, so for floating
/// point types `-0.0 == 0.0` and `NaN` never matches anything.
pub trait GraphBLASType: Copy + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// The runtime type code for this type
    const TYPE_CODE: TypeCode;
}

macro_rules! impl_graphblas_type {
    ($($ty:ty => $code:ident),* $(,)?) => {
        $(
            impl GraphBLASType for $ty {
                const TYPE_CODE: TypeCode = TypeCode::$code;
            }
        )*
    };
}

impl_graphblas_type! {
    bool => Bool,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    f32 => Fp32,
    f64 => Fp64,
}
