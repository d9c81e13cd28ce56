//! Admissible ranges for component and circuit parameters.

use crate::errors::{Bound, DomainError, Parameter};
use crate::math::Scalar;

/// Open interval `(lower, upper)` that a stored parameter must lie strictly inside.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    /// Exclusive lower limit.
    pub lower: Scalar,
    /// Exclusive upper limit.
    pub upper: Scalar,
}

/// Ideal resistor resistance, 1 nΩ to 10 GΩ.
pub const RESISTANCE: Domain = Domain::open(1.0e-9, 10.0e9);
/// Capacitance of ideal and non-ideal capacitors, 1 pF to 1 kF.
pub const CAPACITANCE: Domain = Domain::open(1.0e-12, 1.0e3);
/// Inductance of ideal and non-ideal inductors, 100 fH to 10 kH.
pub const INDUCTANCE: Domain = Domain::open(100.0e-15, 10.0e3);
/// Resistance of a non-ideal resistor.
pub const NON_IDEAL_RESISTANCE: Domain = Domain::open(0.0, 1.0);
/// Parasitic series resistance, below 1 Ω.
pub const PARASITIC_RESISTANCE: Domain = Domain::open(0.0, 1.0);
/// Parasitic inductance, below 10 nH.
pub const PARASITIC_INDUCTANCE: Domain = Domain::open(0.0, 10.0e-9);
/// Parasitic capacitance, below 10 pF.
pub const PARASITIC_CAPACITANCE: Domain = Domain::open(0.0, 10.0e-12);

impl Domain {
    /// Creates an open interval.
    #[must_use]
    pub const fn open(lower: Scalar, upper: Scalar) -> Self {
        Self { lower, upper }
    }

    /// Returns true when `value` lies strictly between the limits.
    #[must_use]
    pub fn contains(&self, value: Scalar) -> bool {
        value > self.lower && value < self.upper
    }

    /// Returns `value` unchanged if it lies inside the domain.
    pub fn check(&self, parameter: Parameter, value: Scalar) -> Result<Scalar, DomainError> {
        if self.contains(value) {
            return Ok(value);
        }
        let bound = if value.is_nan() {
            Bound::Finite
        } else if value <= self.lower {
            Bound::Above(self.lower)
        } else {
            Bound::Below(self.upper)
        };
        Err(DomainError {
            parameter,
            bound,
            value,
        })
    }
}

/// Validates a circuit-level quantity (frequency, voltage): finite and `>= 0`.
///
/// `-0.0` is accepted and stored as `+0.0` so that reactances keep their sign at DC.
pub fn check_non_negative(parameter: Parameter, value: Scalar) -> Result<Scalar, DomainError> {
    let bound = if !value.is_finite() {
        Bound::Finite
    } else if value < 0.0 {
        Bound::AtLeast(0.0)
    } else {
        return Ok(value.abs());
    };
    Err(DomainError {
        parameter,
        bound,
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_are_exclusive() {
        assert!(RESISTANCE.check(Parameter::Resistance, 1.0e-9).is_err());
        assert!(RESISTANCE.check(Parameter::Resistance, 10.0e9).is_err());
        assert_eq!(RESISTANCE.check(Parameter::Resistance, 1.0), Ok(1.0));
    }

    #[test]
    fn violation_reports_the_bound() {
        let err = PARASITIC_CAPACITANCE
            .check(Parameter::ParasiticCapacitance, 1.0e-9)
            .unwrap_err();
        assert_eq!(err.bound, Bound::Below(10.0e-12));
        assert_eq!(err.value, 1.0e-9);
        let err = CAPACITANCE.check(Parameter::Capacitance, Scalar::NAN).unwrap_err();
        assert_eq!(err.bound, Bound::Finite);
    }

    #[test]
    fn circuit_quantities_allow_zero() {
        assert_eq!(check_non_negative(Parameter::Frequency, 0.0), Ok(0.0));
        let err = check_non_negative(Parameter::Voltage, -1.0).unwrap_err();
        assert_eq!(err.bound, Bound::AtLeast(0.0));
        assert!(check_non_negative(Parameter::Frequency, Scalar::INFINITY).is_err());
    }

    #[test]
    fn negative_zero_is_stored_as_positive_zero() {
        let f = check_non_negative(Parameter::Frequency, -0.0).expect("zero is allowed");
        assert_eq!(f, 0.0);
        assert!(f.is_sign_positive());
    }

    #[test]
    fn contains_agrees_with_check() {
        for value in [0.0, 1.0e-13, 5.0e-12, 10.0e-12, Scalar::NAN] {
            assert_eq!(
                PARASITIC_CAPACITANCE.contains(value),
                PARASITIC_CAPACITANCE
                    .check(Parameter::ParasiticCapacitance, value)
                    .is_ok()
            );
        }
    }
}
