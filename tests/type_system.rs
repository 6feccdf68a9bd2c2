// Integration tests for the type system

use rustsparse::core::{GraphBlasError, Matrix, Monoid};
use rustsparse::ops::reduce;
use rustsparse::types::{GraphBLASType, TypeCode};

#[test]
fn test_builtin_type_codes() {
    assert_eq!(bool::TYPE_CODE, TypeCode::Bool);
    assert_eq!(i8::TYPE_CODE, TypeCode::Int8);
    assert_eq!(i16::TYPE_CODE, TypeCode::Int16);
    assert_eq!(i32::TYPE_CODE, TypeCode::Int32);
    assert_eq!(i64::TYPE_CODE, TypeCode::Int64);
    assert_eq!(u8::TYPE_CODE, TypeCode::Uint8);
    assert_eq!(u16::TYPE_CODE, TypeCode::Uint16);
    assert_eq!(u32::TYPE_CODE, TypeCode::Uint32);
    assert_eq!(u64::TYPE_CODE, TypeCode::Uint64);
    assert_eq!(f32::TYPE_CODE, TypeCode::Fp32);
    assert_eq!(f64::TYPE_CODE, TypeCode::Fp64);
}

#[test]
fn test_type_names() {
    assert_eq!(TypeCode::Bool.name(), "bool");
    assert_eq!(TypeCode::Int32.name(), "int32");
    assert_eq!(TypeCode::Int64.name(), "int64");
    assert_eq!(TypeCode::Fp32.name(), "float32");
    assert_eq!(TypeCode::Fp64.name(), "float64");
    assert_eq!(u8::TYPE_CODE.to_string(), "uint8");
}

#[test]
fn test_containers_carry_type_code() {
    let a = Matrix::<f32>::new(3, 3).unwrap();
    assert_eq!(a.type_code(), TypeCode::Fp32);

    let monoid = Monoid::<u16>::max();
    assert_eq!(monoid.identity(), u16::MIN);
    assert_eq!(monoid.terminal(), Some(u16::MAX));
}

#[test]
fn test_slice_source_type_checked() {
    // slices report their element type, so this always agrees
    let values: [i16; 3] = [4, -2, 9];
    let r = reduce(&values[..], &Monoid::<i16>::plus(), None).unwrap();
    assert_eq!(r.value, 11);
}

#[test]
fn test_type_mismatch_display() {
    let err = GraphBlasError::TypeMismatch {
        expected: TypeCode::Fp64,
        found: TypeCode::Fp32,
    };
    assert!(err.to_string().contains("float64"));
    assert!(err.to_string().contains("float32"));
}
