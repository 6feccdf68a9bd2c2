// Core Layer: Rust Error Types
//
// Every operation reports failure through its own Result. There is no
// process-wide "last error" to query after the fact.

use crate::types::TypeCode;
use thiserror::Error;

/// Rust-native GraphBLAS error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphBlasError {
    /// Operator reference is null, freed, or otherwise unusable
    #[error("invalid operator: {0}")]
    InvalidOperator(String),
    /// Value type of an operand disagrees with the expected scalar type
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: TypeCode, found: TypeCode },
    /// Monoid handle is unset
    #[error("monoid handle is null")]
    NullMonoid,
    /// Matrix (or vector) handle is unset
    #[error("matrix handle is null")]
    NullMatrix,
    /// Handle does not name a live object
    #[error("object has not been initialized")]
    UninitializedObject,
    /// Invalid parameter value
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// Structurally invalid index array
    #[error("invalid index: {0}")]
    InvalidIndex(String),
    /// Index exceeds the declared shape
    #[error("index ({row}, {col}) out of bounds for {nrows}x{ncols}")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
    /// Array lengths or shapes disagree
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
}

/// Coarse classification of a GraphBlasError, for adapters that translate
/// errors into their own diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidOperator,
    TypeMismatch,
    NullMonoid,
    NullMatrix,
    UninitializedObject,
    InvalidValue,
    InvalidIndex,
    IndexOutOfBounds,
    DimensionMismatch,
}

impl GraphBlasError {
    /// Get the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidOperator(_) => ErrorKind::InvalidOperator,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::NullMonoid => ErrorKind::NullMonoid,
            Self::NullMatrix => ErrorKind::NullMatrix,
            Self::UninitializedObject => ErrorKind::UninitializedObject,
            Self::InvalidValue(_) => ErrorKind::InvalidValue,
            Self::InvalidIndex(_) => ErrorKind::InvalidIndex,
            Self::IndexOutOfBounds { .. } => ErrorKind::IndexOutOfBounds,
            Self::DimensionMismatch(_) => ErrorKind::DimensionMismatch,
        }
    }

    pub(crate) fn type_mismatch(expected: TypeCode, found: TypeCode) -> Self {
        Self::TypeMismatch { expected, found }
    }
}

/// Result type for GraphBLAS operations
pub type Result<T> = std::result::Result<T, GraphBlasError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(GraphBlasError::NullMonoid.kind(), ErrorKind::NullMonoid);
        assert_eq!(
            GraphBlasError::type_mismatch(TypeCode::Fp64, TypeCode::Int32).kind(),
            ErrorKind::TypeMismatch
        );
        assert_eq!(
            GraphBlasError::InvalidOperator("null".into()).kind(),
            ErrorKind::InvalidOperator
        );
    }

    #[test]
    fn test_error_messages() {
        let err = GraphBlasError::type_mismatch(TypeCode::Fp64, TypeCode::Int32);
        assert_eq!(err.to_string(), "type mismatch: expected float64, found int32");

        let err = GraphBlasError::IndexOutOfBounds {
            row: 4,
            col: 0,
            nrows: 3,
            ncols: 3,
        };
        assert_eq!(err.to_string(), "index (4, 0) out of bounds for 3x3");
    }
}
