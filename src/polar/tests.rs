use approx::assert_abs_diff_eq;
use num_complex::Complex64;

use super::*;

#[test]
fn test_new_keeps_inputs_unrounded() {
    let v = PolarValue::new(1.23456789123, 12.3456789);
    assert_eq!(v.magnitude(), 1.23456789123);
    assert_eq!(v.phase(), 12.3456789);
}

#[test]
fn test_new_takes_absolute_magnitude() {
    let v = PolarValue::new(-4.0, 10.0);
    assert_eq!(v.magnitude(), 4.0);
    assert_eq!(v.phase(), 10.0);
}

#[test]
fn test_default_is_origin() {
    let v = PolarValue::default();
    assert_eq!(v.into_parts(), (0.0, 0.0));
}

#[test]
fn test_from_complex_rounds() {
    let v = PolarValue::from_complex(Complex64::new(1.0, 1.0));
    assert_eq!(v.magnitude(), 1.414214);
    assert_eq!(v.phase(), 45.0);

    let v = PolarValue::from_rectangular(-1.0, -1e-9);
    assert_eq!(v.magnitude(), 1.0);
    assert_eq!(v.phase(), 180.0);
}

#[test]
fn test_from_complex_with_precision() {
    let precision = Precision {
        magnitude: 2,
        phase: 1,
    };
    let v = PolarValue::from_complex_with(Complex64::new(1.0, 2.0), precision);
    assert_eq!(v.magnitude(), 2.24);
    assert_eq!(v.phase(), 63.4);
}

#[test]
fn test_from_real() {
    assert_eq!(PolarValue::from(3.0), PolarValue::new(3.0, 0.0));
    assert_eq!(PolarValue::from(-3.0), PolarValue::new(3.0, 180.0));
}

#[test]
fn test_construction_paths_agree() {
    let direct = PolarValue::new(3.0, 90.0);
    let converted = PolarValue::from(Complex64::new(0.0, 3.0));
    assert_eq!(direct, converted);
}

#[test]
fn test_to_rectangular() {
    let z = PolarValue::new(2.0, 60.0).to_rectangular();
    assert_abs_diff_eq!(z.re, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(z.im, 3f64.sqrt(), epsilon = 1e-6);

    let z: Complex64 = PolarValue::new(1.0, -90.0).into();
    assert_eq!(z, Complex64::new(0.0, -1.0));
}

#[test]
fn test_abs() {
    assert_eq!(PolarValue::new(7.5, 12.0).abs(), 7.5);
}

#[test]
fn test_conjugate() {
    let v = PolarValue::new(2.0, 30.0);
    assert_eq!(v.conjugate(), PolarValue::new(2.0, -30.0));
    assert_eq!(v.conjugate().conjugate(), v);
}

#[test]
fn test_conjugate_of_zero_phase_renders_positive_zero() {
    let v = PolarValue::new(5.0, 0.0).conjugate();
    assert!(v.phase().is_sign_positive());
    assert_eq!(v.to_string(), "5.0∠0.0°");
    assert_eq!(PolarValue::new(1.0, -0.0).to_string(), "1.0∠0.0°");
}

#[test]
fn test_round_with_huge_decimal_count_is_identity() {
    let v = PolarValue::new(1.234, 45.0);
    assert_eq!(v.round(u32::MAX), v);
}

#[test]
fn test_conjugate_at_180_is_self() {
    let v = PolarValue::new(2.0, 180.0);
    assert_eq!(v.conjugate(), v);
}

#[test]
fn test_round() {
    let v = PolarValue::new(3.14159, 33.33333).round(1);
    assert_eq!(v, PolarValue::new(3.1, 33.3));

    let v = PolarValue::new(1.0, -179.6).round(0);
    assert_eq!(v.phase(), 180.0);
}

#[test]
fn test_indexing() {
    let v = PolarValue::new(5.0, -45.0);
    assert_eq!(v[0], 5.0);
    assert_eq!(v[1], -45.0);
    assert_eq!(v.get(0), Ok(5.0));
    assert_eq!(v.get(1), Ok(-45.0));
    assert_eq!(v.get(2), Err(Error::IndexOutOfRange { index: 2 }));
}

#[test]
#[should_panic(expected = "the index 2 is out of range (0 or 1)")]
fn test_index_out_of_range_panics() {
    let v = PolarValue::new(5.0, -45.0);
    let _ = v[2];
}

#[test]
fn test_equality_against_complex() {
    let v = PolarValue::new(3.0, 90.0);
    assert_eq!(v, Complex64::new(0.0, 3.0));
    assert_eq!(Complex64::new(0.0, 3.0), v);
    assert_ne!(v, Complex64::new(3.0, 0.0));
}

#[test]
fn test_try_eq() {
    let v = PolarValue::new(3.0, 90.0);
    assert_eq!(v.try_eq(PolarValue::new(3.0, 90.0)), Ok(true));
    assert_eq!(v.try_eq(PolarValue::new(3.0, -90.0)), Ok(false));
    assert_eq!(v.try_eq(Complex64::new(0.0, 3.0)), Ok(true));
    assert!(matches!(
        v.try_eq(3.0),
        Err(Error::UnsupportedOperand { operation: "eq", .. })
    ));
}

#[test]
fn test_unsupported_message_names_operand() {
    let err = PolarValue::new(1.0, 0.0).try_eq(2.5).unwrap_err();
    assert_eq!(err.to_string(), "unsupported operand for `eq`: real 2.5");
}
