//! Shared error types used across submodules.

use std::fmt;

use thiserror::Error;

use crate::circuits::component::ComponentKind;
use crate::math::Scalar;

/// Every quantity whose value is range-checked before it is stored.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// Primary resistance of a resistor.
    Resistance,
    /// Primary capacitance of a capacitor.
    Capacitance,
    /// Primary inductance of an inductor.
    Inductance,
    /// Parasitic series resistance of a non-ideal component.
    ParasiticResistance,
    /// Parasitic inductance of a non-ideal component.
    ParasiticInductance,
    /// Parasitic capacitance of a non-ideal component.
    ParasiticCapacitance,
    /// Signal frequency of a circuit.
    Frequency,
    /// Source voltage of a circuit.
    Voltage,
}

impl Parameter {
    /// Lowercase human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Resistance => "resistance",
            Self::Capacitance => "capacitance",
            Self::Inductance => "inductance",
            Self::ParasiticResistance => "parasitic resistance",
            Self::ParasiticInductance => "parasitic inductance",
            Self::ParasiticCapacitance => "parasitic capacitance",
            Self::Frequency => "frequency",
            Self::Voltage => "voltage",
        }
    }

    /// SI unit symbol.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Resistance | Self::ParasiticResistance => "Ω",
            Self::Capacitance | Self::ParasiticCapacitance => "F",
            Self::Inductance | Self::ParasiticInductance => "H",
            Self::Frequency => "Hz",
            Self::Voltage => "V",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The limit a rejected value failed to respect.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// Value must be strictly greater than the limit.
    Above(Scalar),
    /// Value must be strictly less than the limit.
    Below(Scalar),
    /// Value must be greater than or equal to the limit.
    AtLeast(Scalar),
    /// Value must be a finite number.
    Finite,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Above(limit) => write!(f, "above {limit:e}"),
            Self::Below(limit) => write!(f, "below {limit:e}"),
            Self::AtLeast(limit) => write!(f, "at least {limit:e}"),
            Self::Finite => f.write_str("finite"),
        }
    }
}

/// A parameter fell outside its declared domain.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{parameter} ({unit}) must be {bound}, got {value:e}", unit = .parameter.unit())]
pub struct DomainError {
    /// Quantity that was rejected.
    pub parameter: Parameter,
    /// Limit that was violated.
    pub bound: Bound,
    /// Offending input.
    pub value: Scalar,
}

/// A component or circuit index was out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} is out of range for {len} item(s)")]
pub struct IndexError {
    /// Requested position.
    pub index: usize,
    /// Number of items available.
    pub len: usize,
}

/// A parallel block has no finite equivalent impedance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("parallel block has a vanishing admittance sum (open circuit)")]
pub struct DivisionError;

/// A component was constructed from the wrong number of parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} takes {expected} parameter(s), got {found}")]
pub struct ArityError {
    /// Kind being constructed.
    pub kind: ComponentKind,
    /// Parameters the kind requires.
    pub expected: usize,
    /// Parameters supplied.
    pub found: usize,
}

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum CircuitError {
    /// Raised when a value falls outside its declared domain.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// Raised when an index does not select an existing item.
    #[error(transparent)]
    Index(#[from] IndexError),
    /// Raised when a parallel block degenerates to an open circuit.
    #[error(transparent)]
    Division(#[from] DivisionError),
    /// Raised when a component receives the wrong number of parameters.
    #[error(transparent)]
    Arity(#[from] ArityError),
    /// Raised when a sweep configuration is internally inconsistent.
    #[error("configuration error: {0}")]
    InvalidConfig(String),
    /// Raised when textual entry notation cannot be parsed.
    #[error("notation error: {0}")]
    Notation(String),
}

/// Convenience alias used by fallible crate operations.
pub type Result<T, E = CircuitError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_names_bound_and_value() {
        let err = DomainError {
            parameter: Parameter::Resistance,
            bound: Bound::Above(1.0e-9),
            value: 0.0,
        };
        let text = err.to_string();
        assert_eq!(text, "resistance (Ω) must be above 1e-9, got 0e0");
    }

    #[test]
    fn wrapped_errors_stay_transparent() {
        let err: CircuitError = IndexError { index: 3, len: 2 }.into();
        assert_eq!(err.to_string(), "index 3 is out of range for 2 item(s)");
        assert!(matches!(CircuitError::from(DivisionError), CircuitError::Division(_)));
    }
}
