use std::fmt;

use super::PolarValue;

/// Renders `magnitude∠phase°`.
///
/// Without an explicit precision, floats use their shortest round-trip form
/// and always carry a decimal point (`5.0∠30.0°`). With one (`{:.2}`), both
/// fields use it.
impl fmt::Display for PolarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(prec) => write!(f, "{:.*}∠{:.*}°", prec, self.magnitude, prec, self.phase),
            None => write!(f, "{:?}∠{:?}°", self.magnitude, self.phase),
        }
    }
}

/// Radians rendering of a [`PolarValue`], created by [`PolarValue::radians`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Radians(PolarValue);

impl PolarValue {
    /// Display adapter showing the phase in radians.
    ///
    /// # Example
    /// ```
    /// use polarform::PolarValue;
    ///
    /// let v = PolarValue::new(2.0, 180.0);
    /// assert_eq!(v.radians().to_string(), format!("2.0∠{:?} rad", v.phase_radians()));
    /// assert_eq!(format!("{:.3}", v.radians()), "2.000∠3.142 rad");
    /// ```
    pub fn radians(&self) -> Radians {
        Radians(*self)
    }
}

impl fmt::Display for Radians {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.0.magnitude;
        let phase = self.0.phase_radians();
        match f.precision() {
            Some(prec) => write!(f, "{:.*}∠{:.*} rad", prec, magnitude, prec, phase),
            None => write!(f, "{magnitude:?}∠{phase:?} rad"),
        }
    }
}
