//! Rounding configuration for computed polar values.

use crate::angle::round_to;

/// Decimal places kept on values derived from a computation.
///
/// Direct construction from a `(magnitude, phase)` pair is never rounded;
/// conversion from rectangular form and every arithmetic result are.
///
/// # Example
/// ```
/// use polarform::Precision;
///
/// let p = Precision::default();
/// assert_eq!(p.magnitude, 6);
/// assert_eq!(p.phase, 4);
/// assert_eq!(p.apply(1.23456789, 12.345678), (1.234568, 12.3457));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    /// Decimal places kept on the magnitude.
    pub magnitude: u32,
    /// Decimal places kept on the phase, in degrees.
    pub phase: u32,
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            magnitude: 6,
            phase: 4,
        }
    }
}

impl Precision {
    /// Round a `(magnitude, phase)` pair.
    pub fn apply(&self, magnitude: f64, phase: f64) -> (f64, f64) {
        (
            round_to(magnitude, self.magnitude),
            round_to(phase, self.phase),
        )
    }
}
