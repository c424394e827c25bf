//! Angle normalization and decimal rounding helpers.

/// Lower (exclusive) bound of the canonical phase interval, in degrees.
pub const PHASE_MIN: f64 = -180.0;
/// Upper (inclusive) bound of the canonical phase interval, in degrees.
pub const PHASE_MAX: f64 = 180.0;

const FULL_TURN: f64 = 360.0;

/// Map an angle in degrees onto the canonical interval `(-180, 180]`.
///
/// Angles already inside the interval are returned unchanged, so the function
/// is idempotent bit for bit. An input of exactly `-180` maps to `180`.
/// Non-finite input yields NaN.
///
/// # Example
/// ```
/// use polarform::angle::normalize;
///
/// assert_eq!(normalize(190.0), -170.0);
/// assert_eq!(normalize(-180.0), 180.0);
/// assert_eq!(normalize(720.0), 0.0);
/// assert_eq!(normalize(normalize(-545.0)), normalize(-545.0));
/// ```
pub fn normalize(angle_degrees: f64) -> f64 {
    if angle_degrees > PHASE_MIN && angle_degrees <= PHASE_MAX {
        return angle_degrees;
    }
    if !angle_degrees.is_finite() {
        return f64::NAN;
    }

    let wrapped = PHASE_MAX - (PHASE_MAX - angle_degrees).rem_euclid(FULL_TURN);
    // rem_euclid may return the modulus itself for tiny negative remainders
    if wrapped <= PHASE_MIN {
        wrapped + FULL_TURN
    } else {
        wrapped
    }
}

/// Round `x` to `decimals` decimal places, halves away from zero.
///
/// Values too large to carry a fractional digit at that scale, and decimal
/// counts beyond what an `f64` can represent, return `x` unchanged.
///
/// # Example
/// ```
/// use polarform::angle::round_to;
///
/// assert_eq!(round_to(3.14159265, 4), 3.1416);
/// assert_eq!(round_to(-2.5, 0), -3.0);
/// ```
pub fn round_to(x: f64, decimals: u32) -> f64 {
    let Ok(decimals) = i32::try_from(decimals) else {
        return x;
    };
    let scale = 10f64.powi(decimals);
    let scaled = x * scale;
    if !scaled.is_finite() {
        return x;
    }
    let rounded = scaled.round() / scale;
    // keep -0.0 from leaking into rendered output
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Phase of a rectangular complex number, in degrees, normalized.
pub(crate) fn phase_degrees(z: num_complex::Complex64) -> f64 {
    normalize(z.arg().to_degrees())
}
