//! Complex numbers in polar form.
//!
//! A [`PolarValue`] holds a non-negative magnitude and a phase in degrees that
//! is always inside `(-180, 180]`. Every construction path routes the phase
//! through [`normalize`](crate::angle::normalize), and no method mutates an
//! existing value: arithmetic, conjugation and rounding all return a new one.

mod format;
mod operand;
mod ops;

pub use format::Radians;
pub use operand::Operand;

use std::ops::Index;

use num_complex::Complex64;

use crate::angle::{normalize, phase_degrees, round_to};
use crate::{Error, Precision, Result};

/// A complex number stored as `(magnitude, phase in degrees)`.
///
/// # Example
/// ```
/// use num_complex::Complex64;
/// use polarform::PolarValue;
///
/// let v = PolarValue::new(3.0, 90.0);
/// assert_eq!(v, Complex64::new(0.0, 3.0));
/// assert_eq!(v.to_rectangular(), Complex64::new(0.0, 3.0));
/// assert_eq!(v.to_string(), "3.0∠90.0°");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolarValue {
    magnitude: f64,
    phase: f64,
}

impl PolarValue {
    /// Build a value from a magnitude and a phase in degrees.
    ///
    /// The magnitude is taken by absolute value and the phase is normalized
    /// (a zero phase is always stored as `+0.0`). Neither field is rounded.
    ///
    /// # Example
    /// ```
    /// use polarform::PolarValue;
    ///
    /// let v = PolarValue::new(-2.0, 390.0);
    /// assert_eq!(v.magnitude(), 2.0);
    /// assert_eq!(v.phase(), 30.0);
    /// ```
    pub fn new(magnitude: f64, phase: f64) -> Self {
        Self {
            magnitude: magnitude.abs(),
            // + 0.0 turns a -0.0 phase into 0.0
            phase: normalize(phase) + 0.0,
        }
    }

    /// Convert a rectangular complex number, rounding with the default
    /// [`Precision`] (magnitude to 6 places, phase to 4).
    pub fn from_complex(z: Complex64) -> Self {
        Self::from_complex_with(z, Precision::default())
    }

    /// Convert a rectangular complex number under an explicit precision.
    pub fn from_complex_with(z: Complex64, precision: Precision) -> Self {
        let (magnitude, phase) = precision.apply(z.norm(), phase_degrees(z));
        // rounding can land a phase of -179.99999 on -180
        Self::new(magnitude, phase)
    }

    /// Convert the rectangular pair `re + i·im`.
    pub fn from_rectangular(re: f64, im: f64) -> Self {
        Self::from_complex(Complex64::new(re, im))
    }

    /// Result of an arithmetic operation: normalized, then rounded with the
    /// default precision.
    pub(crate) fn computed(magnitude: f64, phase: f64) -> Self {
        let (magnitude, phase) = Precision::default().apply(magnitude.abs(), normalize(phase));
        Self::new(magnitude, phase)
    }

    /// Magnitude (absolute value), always `>= 0`.
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Phase in degrees, inside `(-180, 180]`.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Phase in radians.
    pub fn phase_radians(&self) -> f64 {
        self.phase.to_radians()
    }

    /// Same as [`magnitude`](Self::magnitude).
    pub fn abs(&self) -> f64 {
        self.magnitude
    }

    /// `(magnitude, phase)` as a tuple.
    pub fn into_parts(self) -> (f64, f64) {
        (self.magnitude, self.phase)
    }

    /// Rectangular form, each component rounded to 6 decimal places.
    ///
    /// # Example
    /// ```
    /// use num_complex::Complex64;
    /// use polarform::PolarValue;
    ///
    /// let z = PolarValue::new(2.0, 180.0).to_rectangular();
    /// assert_eq!(z, Complex64::new(-2.0, 0.0));
    /// ```
    pub fn to_rectangular(&self) -> Complex64 {
        let digits = Precision::default().magnitude;
        let (sin, cos) = self.phase_radians().sin_cos();
        Complex64::new(
            round_to(self.magnitude * cos, digits),
            round_to(self.magnitude * sin, digits),
        )
    }

    /// Complex conjugate: same magnitude, negated phase.
    ///
    /// A value at exactly 180° is its own conjugate, since `-180` normalizes
    /// back to `180`.
    pub fn conjugate(&self) -> Self {
        Self::new(self.magnitude, -self.phase)
    }

    /// Round both fields to `decimals` places and renormalize.
    ///
    /// # Example
    /// ```
    /// use polarform::PolarValue;
    ///
    /// let v = PolarValue::new(1.23456, -179.996).round(2);
    /// assert_eq!(v.magnitude(), 1.23);
    /// assert_eq!(v.phase(), 180.0);
    /// ```
    pub fn round(&self, decimals: u32) -> Self {
        Self::new(
            round_to(self.magnitude, decimals),
            round_to(self.phase, decimals),
        )
    }

    /// Field by position: `0` is the magnitude, `1` the phase.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] for any other index.
    pub fn get(&self, index: usize) -> Result<f64> {
        match index {
            0 => Ok(self.magnitude),
            1 => Ok(self.phase),
            _ => Err(Error::IndexOutOfRange { index }),
        }
    }

    /// Equality against any operand kind.
    ///
    /// Polar operands compare field by field; rectangular operands are first
    /// converted with [`from_complex`](Self::from_complex).
    ///
    /// # Errors
    /// Comparing against a plain real is [`Error::UnsupportedOperand`].
    pub fn try_eq(&self, other: impl Into<Operand>) -> Result<bool> {
        match other.into() {
            Operand::Polar(p) => Ok(*self == p),
            Operand::Rectangular(z) => Ok(*self == z),
            op @ Operand::Real(_) => Err(op.unsupported("eq")),
        }
    }
}

impl Index<usize> for PolarValue {
    type Output = f64;

    /// # Panics
    /// Panics when `index` is neither 0 nor 1.
    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.magnitude,
            1 => &self.phase,
            _ => panic!("{}", Error::IndexOutOfRange { index }),
        }
    }
}

impl From<Complex64> for PolarValue {
    fn from(z: Complex64) -> Self {
        Self::from_complex(z)
    }
}

/// A real number as a point on the real axis: `|r|∠0°`, or `|r|∠180°` when
/// negative. Unlike [`PolarValue::new`], the sign is kept as a phase.
impl From<f64> for PolarValue {
    fn from(r: f64) -> Self {
        let phase = if r < 0.0 { 180.0 } else { 0.0 };
        Self::new(r, phase)
    }
}

impl From<PolarValue> for Complex64 {
    fn from(p: PolarValue) -> Self {
        p.to_rectangular()
    }
}

impl PartialEq<Complex64> for PolarValue {
    fn eq(&self, other: &Complex64) -> bool {
        *self == PolarValue::from_complex(*other)
    }
}

impl PartialEq<PolarValue> for Complex64 {
    fn eq(&self, other: &PolarValue) -> bool {
        other == self
    }
}

#[cfg(test)]
mod tests;
