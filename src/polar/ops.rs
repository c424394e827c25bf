//! Arithmetic between polar values, reals and rectangular complex numbers.
//!
//! Addition and subtraction go through rectangular form; multiplication,
//! division and powers work on magnitude and phase directly. Every result is
//! normalized and rounded with the default [`Precision`](crate::Precision).

use std::ops::{Add, Div, Mul, Sub};

use num_complex::Complex64;

use super::{Operand, PolarValue};
use crate::angle::normalize;
use crate::{Error, Result};

/// Magnitude factor and phase shift of a right-hand operand.
///
/// A real on the right only scales the magnitude; its sign is dropped with the
/// absolute value taken in [`PolarValue::computed`], so the phase is unchanged.
fn scaling_parts(rhs: Operand) -> (f64, f64) {
    match rhs {
        Operand::Real(r) => (r, 0.0),
        other => other.parts(),
    }
}

impl PolarValue {
    fn sum(self, rhs: Operand) -> Self {
        Self::from_complex(self.to_rectangular() + rhs.to_complex())
    }

    fn difference(self, rhs: Operand) -> Self {
        Self::from_complex(self.to_rectangular() - rhs.to_complex())
    }

    fn product(self, rhs: Operand) -> Self {
        let (factor, phase) = scaling_parts(rhs);
        Self::computed(self.magnitude * factor, self.phase + phase)
    }

    /// Divide by any operand kind.
    ///
    /// A real divisor scales the magnitude only, whatever its sign.
    ///
    /// # Errors
    /// Returns [`Error::DivisionByZero`] when the divisor has zero magnitude.
    ///
    /// # Example
    /// ```
    /// use polarform::PolarValue;
    ///
    /// let q = PolarValue::new(8.0, 50.0).try_div(PolarValue::new(2.0, 20.0)).unwrap();
    /// assert_eq!(q, PolarValue::new(4.0, 30.0));
    /// assert!(PolarValue::new(1.0, 0.0).try_div(0.0).is_err());
    /// ```
    pub fn try_div(self, rhs: impl Into<Operand>) -> Result<Self> {
        let rhs = rhs.into();
        let (divisor, phase) = scaling_parts(rhs);
        if divisor == 0.0 {
            return Err(Error::DivisionByZero {
                operand: rhs.to_string(),
            });
        }
        Ok(Self::computed(self.magnitude / divisor, self.phase - phase))
    }

    /// Raise to a non-negative integer power.
    ///
    /// # Example
    /// ```
    /// use polarform::PolarValue;
    ///
    /// let cube = PolarValue::new(2.0, 45.0).powi(3);
    /// assert_eq!(cube.magnitude(), 8.0);
    /// assert_eq!(cube.phase(), 135.0);
    /// ```
    pub fn powi(self, n: u32) -> Self {
        let magnitude = match i32::try_from(n) {
            Ok(n) => self.magnitude.powi(n),
            Err(_) => self.magnitude.powf(f64::from(n)),
        };
        Self::computed(magnitude, normalize(self.phase * f64::from(n)))
    }

    /// Raise to a power given as an operand.
    ///
    /// # Errors
    /// Only a real holding a finite, non-negative whole number is accepted;
    /// every other exponent is [`Error::UnsupportedOperand`].
    pub fn try_pow(self, exponent: impl Into<Operand>) -> Result<Self> {
        match exponent.into() {
            Operand::Real(n)
                if n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n <= f64::from(u32::MAX) =>
            {
                Ok(self.powi(n as u32))
            }
            op => Err(op.unsupported("pow")),
        }
    }
}

impl Operand {
    /// `self + rhs`, with the polar value on the right.
    pub fn add_polar(self, rhs: PolarValue) -> PolarValue {
        rhs.sum(self)
    }

    /// `self - rhs`, with the polar value on the right.
    ///
    /// # Example
    /// ```
    /// use polarform::{Operand, PolarValue};
    ///
    /// let d = Operand::from(5.0).sub_polar(PolarValue::new(2.0, 0.0));
    /// assert_eq!(d, PolarValue::new(3.0, 0.0));
    /// ```
    pub fn sub_polar(self, rhs: PolarValue) -> PolarValue {
        PolarValue::from_complex(self.to_complex() - rhs.to_rectangular())
    }

    /// `self * rhs`, with the polar value on the right.
    pub fn mul_polar(self, rhs: PolarValue) -> PolarValue {
        rhs.product(self)
    }

    /// `self / rhs`, with the polar value on the right.
    ///
    /// # Errors
    /// Returns [`Error::DivisionByZero`] when `rhs` has zero magnitude.
    pub fn try_div_polar(self, rhs: PolarValue) -> Result<PolarValue> {
        if rhs.magnitude == 0.0 {
            return Err(Error::DivisionByZero {
                operand: Operand::Polar(rhs).to_string(),
            });
        }
        let (magnitude, phase) = self.parts();
        Ok(PolarValue::computed(
            magnitude / rhs.magnitude,
            phase - rhs.phase,
        ))
    }
}

fn expect_quotient(quotient: Result<PolarValue>) -> PolarValue {
    match quotient {
        Ok(q) => q,
        Err(e) => panic!("{e}"),
    }
}

impl<T: Into<Operand>> Add<T> for PolarValue {
    type Output = PolarValue;

    fn add(self, rhs: T) -> PolarValue {
        self.sum(rhs.into())
    }
}

impl<T: Into<Operand>> Sub<T> for PolarValue {
    type Output = PolarValue;

    fn sub(self, rhs: T) -> PolarValue {
        self.difference(rhs.into())
    }
}

impl<T: Into<Operand>> Mul<T> for PolarValue {
    type Output = PolarValue;

    fn mul(self, rhs: T) -> PolarValue {
        self.product(rhs.into())
    }
}

impl<T: Into<Operand>> Div<T> for PolarValue {
    type Output = PolarValue;

    /// # Panics
    /// Panics when the divisor has zero magnitude; use
    /// [`PolarValue::try_div`] to handle that case.
    fn div(self, rhs: T) -> PolarValue {
        expect_quotient(self.try_div(rhs))
    }
}

// Reflected forms: a real, rectangular or generic operand on the left.
macro_rules! reflected_ops {
    ($($lhs:ty),*) => {$(
        impl Add<PolarValue> for $lhs {
            type Output = PolarValue;

            fn add(self, rhs: PolarValue) -> PolarValue {
                Operand::from(self).add_polar(rhs)
            }
        }

        impl Sub<PolarValue> for $lhs {
            type Output = PolarValue;

            fn sub(self, rhs: PolarValue) -> PolarValue {
                Operand::from(self).sub_polar(rhs)
            }
        }

        impl Mul<PolarValue> for $lhs {
            type Output = PolarValue;

            fn mul(self, rhs: PolarValue) -> PolarValue {
                Operand::from(self).mul_polar(rhs)
            }
        }

        impl Div<PolarValue> for $lhs {
            type Output = PolarValue;

            /// # Panics
            /// Panics when `rhs` has zero magnitude.
            fn div(self, rhs: PolarValue) -> PolarValue {
                expect_quotient(Operand::from(self).try_div_polar(rhs))
            }
        }
    )*};
}

reflected_ops!(f64, i32, Complex64, Operand);
