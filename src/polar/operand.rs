use std::fmt;

use num_complex::Complex64;

use super::PolarValue;
use crate::Error;

/// The operand kinds a [`PolarValue`] can be combined with.
///
/// Operators match on this set exhaustively; anything an operator does not
/// support surfaces as [`Error::UnsupportedOperand`] instead of a default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// A plain real number.
    Real(f64),
    /// A complex number in rectangular form.
    Rectangular(Complex64),
    /// Another polar value.
    Polar(PolarValue),
}

impl Operand {
    /// Short name of the operand kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Real(_) => "real",
            Operand::Rectangular(_) => "rectangular",
            Operand::Polar(_) => "polar",
        }
    }

    /// The operand in rectangular form.
    pub fn to_complex(&self) -> Complex64 {
        match self {
            Operand::Real(r) => Complex64::new(*r, 0.0),
            Operand::Rectangular(z) => *z,
            Operand::Polar(p) => p.to_rectangular(),
        }
    }

    /// Unrounded `(magnitude, phase in degrees)`. A negative real sits at 180°.
    pub(crate) fn parts(&self) -> (f64, f64) {
        match self {
            Operand::Real(r) => (r.abs(), if *r < 0.0 { 180.0 } else { 0.0 }),
            Operand::Rectangular(z) => (z.norm(), z.arg().to_degrees()),
            Operand::Polar(p) => (p.magnitude(), p.phase()),
        }
    }

    pub(crate) fn unsupported(&self, operation: &'static str) -> Error {
        Error::UnsupportedOperand {
            operation,
            operand: self.to_string(),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.kind())?;
        match self {
            Operand::Real(r) => write!(f, "{r:?}"),
            Operand::Rectangular(z) => write!(f, "{z}"),
            Operand::Polar(p) => write!(f, "{p}"),
        }
    }
}

impl From<f64> for Operand {
    fn from(r: f64) -> Self {
        Operand::Real(r)
    }
}

impl From<f32> for Operand {
    fn from(r: f32) -> Self {
        Operand::Real(f64::from(r))
    }
}

impl From<i32> for Operand {
    fn from(r: i32) -> Self {
        Operand::Real(f64::from(r))
    }
}

impl From<u32> for Operand {
    fn from(r: u32) -> Self {
        Operand::Real(f64::from(r))
    }
}

impl From<Complex64> for Operand {
    fn from(z: Complex64) -> Self {
        Operand::Rectangular(z)
    }
}

impl From<PolarValue> for Operand {
    fn from(p: PolarValue) -> Self {
        Operand::Polar(p)
    }
}
