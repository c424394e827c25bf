//! Complex numbers in polar form for phasor arithmetic.
//!
//! Polarform provides [`PolarValue`], a complex number stored as a magnitude
//! and a phase angle in degrees, and lets it mix freely with plain reals and
//! rectangular [`Complex64`](num_complex::Complex64) numbers. It is aimed at
//! electrical-engineering style phasor math where working in degrees is the
//! norm.
//!
//! # Quick Start
//!
//! ```rust
//! use num_complex::Complex64;
//! use polarform::PolarValue;
//!
//! let v = PolarValue::new(10.0, 30.0);
//! let i = PolarValue::new(2.0, -15.0);
//!
//! let z = v / i;
//! assert_eq!(z, PolarValue::new(5.0, 45.0));
//!
//! let s = v + Complex64::new(1.0, 0.0);
//! assert!(s.magnitude() > v.magnitude());
//! assert_eq!(s.to_string(), format!("{:?}∠{:?}°", s.magnitude(), s.phase()));
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`angle`] | Phase normalization onto `(-180, 180]`, decimal rounding |
//! | [`polar`] | The value type, operand kinds, arithmetic and formatting |
//! | [`precision`] | Rounding applied to computed results |
//! | `display` | Phasor plots as RGB/PPM (feature `display`) |
//!
//! # Invariants
//!
//! Every [`PolarValue`] has a magnitude `>= 0` and a phase in `(-180, 180]`.
//! Values are immutable; all operations return new values.
//!
//! # Rounding
//!
//! Values built with [`PolarValue::new`] keep their inputs as given.
//! Conversion from rectangular form and every arithmetic result are rounded
//! with [`Precision::default`]: magnitude to 6 decimals, phase to 4.
//!
//! # Error Handling
//!
//! Fallible operations return [`Result<T>`], an alias for
//! `std::result::Result<T, Error>`. The [`Error`] enum covers unsupported
//! operands, out-of-range indices and division by zero.
//!
//! # Feature Flags
//!
//! | Flag | Description |
//! |------|-------------|
//! | `display` | PPM-based phasor visualization |

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, Result};

pub mod angle;
pub mod polar;
pub mod precision;

pub use polar::{Operand, PolarValue, Radians};
pub use precision::Precision;

#[cfg(feature = "display")]
pub mod display;
