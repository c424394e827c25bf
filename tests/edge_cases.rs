//! Edge case tests for boundary conditions and unusual inputs.
//!
//! Tests cover:
//! - Phases on the -180/180 boundary
//! - Zero magnitudes and zero divisors
//! - Unsupported operands

use num_complex::Complex64;
use polarform::{Error, Operand, PolarValue};

// Phase Boundary Tests

#[test]
fn minus_180_becomes_180() {
    assert_eq!(PolarValue::new(1.0, -180.0).phase(), 180.0);
    assert_eq!(PolarValue::from_rectangular(-1.0, -0.0).phase(), 180.0);
}

#[test]
fn conjugate_of_180_is_itself() {
    let v = PolarValue::new(1.0, 180.0);
    assert_eq!(v.conjugate(), v);
}

#[test]
fn many_turns_wrap() {
    assert_eq!(PolarValue::new(1.0, 3600.0 + 45.0).phase(), 45.0);
    assert_eq!(PolarValue::new(1.0, -3600.0 - 45.0).phase(), -45.0);
}

#[test]
fn phase_rounding_onto_boundary_is_renormalized() {
    let v = PolarValue::from_rectangular(-1.0, -1e-7);
    assert_eq!(v.phase(), 180.0);
}

// Zero Tests

#[test]
fn zero_value_renders() {
    assert_eq!(PolarValue::default().to_string(), "0.0∠0.0°");
    assert_eq!(PolarValue::from_complex(Complex64::new(0.0, 0.0)), PolarValue::default());
}

#[test]
fn zero_times_anything_is_zero_magnitude() {
    let v = PolarValue::default() * PolarValue::new(5.0, 77.0);
    assert_eq!(v.magnitude(), 0.0);
}

#[test]
fn zero_power_zero_is_one() {
    assert_eq!(PolarValue::default().powi(0), PolarValue::new(1.0, 0.0));
}

#[test]
fn dividing_by_zero_fails_for_every_kind() {
    let v = PolarValue::new(1.0, 0.0);
    for divisor in [
        Operand::Real(0.0),
        Operand::Rectangular(Complex64::new(0.0, 0.0)),
        Operand::Polar(PolarValue::new(0.0, 90.0)),
    ] {
        assert!(matches!(v.try_div(divisor), Err(Error::DivisionByZero { .. })));
    }
}

#[test]
#[should_panic(expected = "division by zero")]
fn reflected_division_by_zero_panics() {
    let _ = 1.0 / PolarValue::default();
}

// Unsupported Operand Tests

#[test]
fn equality_with_real_is_unsupported() {
    let err = PolarValue::new(2.0, 0.0).try_eq(2.0).unwrap_err();
    assert!(matches!(err, Error::UnsupportedOperand { operation: "eq", .. }));
}

#[test]
fn fractional_and_negative_powers_are_unsupported() {
    let v = PolarValue::new(4.0, 10.0);
    assert!(v.try_pow(0.5).is_err());
    assert!(v.try_pow(-2).is_err());
    assert!(v.try_pow(Complex64::new(2.0, 0.0)).is_err());
    assert_eq!(v.try_pow(2), Ok(PolarValue::new(16.0, 20.0)));
}
