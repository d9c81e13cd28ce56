//! Frequency conversions and numerical thresholds shared by the circuit code.

use std::f64::consts::TAU;

/// Relative tolerance used when deciding that a parallel admittance sum has vanished.
pub const ADMITTANCE_CANCELLATION_TOLERANCE: f64 = f64::EPSILON;

/// Magnitudes at or below this value are printed in scientific notation.
pub const FIXED_NOTATION_LOWER: f64 = 1.0e-2;
/// Magnitudes at or above this value are printed in scientific notation.
pub const FIXED_NOTATION_UPPER: f64 = 1.0e3;

/// Returns the angular frequency corresponding to a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: f64) -> f64 {
    TAU * hz
}
