// End-to-end reductions through the handle layer
//
// Builds a matrix from Matrix Market text, a user-defined max operator and a
// terminal monoid over it, then reduces with and without early exit.

use rustsparse::api::{
    binary_op_free, binary_op_new, matrix_free, matrix_reduce, matrix_register, monoid_free,
    monoid_register, monoid_terminal_new, monoid_type, vector_free, vector_reduce,
    vector_register, BinaryOpHandle, MatrixHandle, MonoidHandle,
};
use rustsparse::core::{ErrorKind, GraphBlasError, Monoid, Vector};
use rustsparse::io::parse_matrix_market;
use rustsparse::ops::Descriptor;
use rustsparse::types::TypeCode;

const MATRIX: &str = "%%MatrixMarket matrix coordinate real general
% four stored entries, one of them the terminal
3 3 4
1 1 2.0
2 2 5.0
3 1 7.0
3 3 3.0
";

fn maxdouble(x: f64, y: f64) -> f64 {
    if x > y {
        x
    } else {
        y
    }
}

#[test]
fn test_reduce_to_terminal() {
    let mut a = matrix_register(parse_matrix_market(MATRIX).unwrap()).unwrap();
    let mut max = binary_op_new::<f64, f64, f64, _>(maxdouble, "maxdouble").unwrap();
    let mut monoid = monoid_terminal_new::<f64>(max, 0.0, 7.0).unwrap();
    assert_eq!(monoid_type(monoid).unwrap(), TypeCode::Fp64);

    let early = matrix_reduce::<f64>(a, monoid, None).unwrap();
    let full = matrix_reduce::<f64>(a, monoid, Some(&Descriptor::full_fold())).unwrap();
    assert_eq!(early.value, 7.0);
    assert_eq!(early, full);

    monoid_free(&mut monoid).unwrap();
    binary_op_free(&mut max).unwrap();
    matrix_free(&mut a).unwrap();
    assert!(monoid.is_null() && max.is_null() && a.is_null());
}

#[test]
fn test_terminal_never_reached() {
    let a = matrix_register(parse_matrix_market(MATRIX).unwrap()).unwrap();
    let max = binary_op_new::<f64, f64, f64, _>(maxdouble, "maxdouble").unwrap();
    let monoid = monoid_terminal_new::<f64>(max, 0.0, 1e9).unwrap();

    let r = matrix_reduce::<f64>(a, monoid, None).unwrap();
    assert_eq!(r.value, 7.0);
    assert!(r.had_entries);
}

#[test]
fn test_empty_registered_matrix() {
    let a = rustsparse::api::matrix_new::<f64>(5, 5).unwrap();
    let max = binary_op_new::<f64, f64, f64, _>(maxdouble, "maxdouble").unwrap();
    let monoid = monoid_terminal_new::<f64>(max, 0.0, 1.0).unwrap();

    let r = matrix_reduce::<f64>(a, monoid, None).unwrap();
    assert_eq!(r.value, 0.0);
    assert!(!r.had_entries);
}

#[test]
fn test_null_handles() {
    let a = matrix_register(parse_matrix_market(MATRIX).unwrap()).unwrap();
    let monoid = monoid_register(Monoid::<f64>::max()).unwrap();

    let err = matrix_reduce::<f64>(a, MonoidHandle::NULL, None).unwrap_err();
    assert_eq!(err, GraphBlasError::NullMonoid);

    let err = matrix_reduce::<f64>(MatrixHandle::NULL, monoid, None).unwrap_err();
    assert_eq!(err, GraphBlasError::NullMatrix);

    // both null: the monoid is reported first
    let err = matrix_reduce::<f64>(MatrixHandle::NULL, MonoidHandle::NULL, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NullMonoid);
}

#[test]
fn test_null_operator() {
    let err = monoid_terminal_new::<f64>(BinaryOpHandle::NULL, 0.0, 1.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidOperator);
}

#[test]
fn test_operator_type_mismatch() {
    let op = binary_op_new::<f64, f64, bool, _>(|x, y| x > y, "gt").unwrap();
    let err = monoid_terminal_new::<f64>(op, 0.0, 1.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);

    let op = binary_op_new::<f32, f32, f32, _>(|x, y| x.max(y), "max_fp32").unwrap();
    let err = monoid_terminal_new::<f64>(op, 0.0, 1.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
}

#[test]
fn test_matrix_type_mismatch() {
    let a = matrix_register(parse_matrix_market(MATRIX).unwrap()).unwrap();
    let monoid = monoid_register(Monoid::<i64>::max()).unwrap();

    let err = matrix_reduce::<i64>(a, monoid, None).unwrap_err();
    assert_eq!(
        err,
        GraphBlasError::TypeMismatch {
            expected: TypeCode::Int64,
            found: TypeCode::Fp64,
        }
    );

    let err = matrix_reduce::<f64>(a, monoid, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
}

#[test]
fn test_vector_reduce_with_builtin_monoid() {
    let v = Vector::from_entries(10, vec![0, 3, 9], vec![false, true, false]).unwrap();
    let mut v = vector_register(v).unwrap();
    let lor = monoid_register(Monoid::<bool>::lor()).unwrap();

    let r = vector_reduce::<bool>(v, lor, None).unwrap();
    assert!(r.value);

    vector_free(&mut v).unwrap();
    assert!(v.is_null());
}

#[test]
fn test_freed_matrix_is_uninitialized() {
    let mut a = matrix_register(parse_matrix_market(MATRIX).unwrap()).unwrap();
    let stale = a;
    let monoid = monoid_register(Monoid::<f64>::max()).unwrap();

    matrix_free(&mut a).unwrap();
    let err = matrix_reduce::<f64>(stale, monoid, None).unwrap_err();
    assert_eq!(err, GraphBlasError::UninitializedObject);
}
