//! A driven chain of component snapshots and its derived quantities.

use num_complex::Complex;

use crate::circuits::component::{Component, ComponentKind, Passive};
use crate::circuits::domain::check_non_negative;
use crate::circuits::network::{reduce, ConnectionKind};
use crate::constants::angular_frequency;
use crate::errors::{DivisionError, DomainError, IndexError, Parameter, Result};
use crate::math::{open_circuit, phasor, CScalar, Scalar};

/// One position in a circuit: an owned component snapshot and how it connects.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircuitEntry {
    /// Owned copy of the component.
    pub component: Component,
    /// Series or parallel with its neighbours.
    pub connection: ConnectionKind,
    /// Marks the entry as nested for listings; does not affect reduction.
    pub nested: bool,
}

/// Read-only description of an entry at the circuit's frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntrySummary {
    /// Component kind.
    pub kind: ComponentKind,
    /// Diagram symbol.
    pub symbol: char,
    /// Primary value.
    pub value: Scalar,
    /// Impedance at the circuit frequency.
    pub impedance: Complex<Scalar>,
    /// Series or parallel.
    pub connection: ConnectionKind,
    /// Nested flag.
    pub nested: bool,
}

/// Circuit driven at a single frequency and voltage.
///
/// The aggregate impedance is recomputed after every successful mutation and is
/// never settable directly. Failed operations leave the circuit unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit {
    frequency: Scalar,
    voltage: Scalar,
    entries: Vec<CircuitEntry>,
    impedance: Result<Complex<Scalar>, DivisionError>,
}

impl Circuit {
    /// Creates an empty circuit; frequency (Hz) and voltage (V) must be finite and non-negative.
    pub fn new(frequency_hz: Scalar, voltage_v: Scalar) -> Result<Self, DomainError> {
        Ok(Self {
            frequency: check_non_negative(Parameter::Frequency, frequency_hz)?,
            voltage: check_non_negative(Parameter::Voltage, voltage_v)?,
            entries: Vec::new(),
            impedance: Ok(Complex::default()),
        })
    }

    /// Appends a copy of `component` and recomputes the impedance.
    pub fn add(&mut self, component: &Component, connection: ConnectionKind, nested: bool) {
        self.entries.push(CircuitEntry {
            component: *component,
            connection,
            nested,
        });
        self.recompute();
    }

    /// Removes the entry at `index` and recomputes the impedance.
    pub fn remove(&mut self, index: usize) -> Result<CircuitEntry, IndexError> {
        self.check_index(index)?;
        let entry = self.entries.remove(index);
        self.recompute();
        Ok(entry)
    }

    /// Changes the primary value of the component held at `index`.
    pub fn set_component_value(&mut self, index: usize, value: Scalar) -> Result<()> {
        self.check_index(index)?;
        self.entries[index].component.set_value(value)?;
        self.recompute();
        Ok(())
    }

    /// Changes the signal frequency (Hz) and recomputes the impedance.
    pub fn set_frequency(&mut self, frequency_hz: Scalar) -> Result<(), DomainError> {
        self.frequency = check_non_negative(Parameter::Frequency, frequency_hz)?;
        self.recompute();
        Ok(())
    }

    /// Changes the source voltage (V).
    pub fn set_voltage(&mut self, voltage_v: Scalar) -> Result<(), DomainError> {
        self.voltage = check_non_negative(Parameter::Voltage, voltage_v)?;
        self.recompute();
        Ok(())
    }

    /// Signal frequency in hertz.
    #[must_use]
    pub const fn frequency(&self) -> Scalar {
        self.frequency
    }

    /// Source voltage in volts.
    #[must_use]
    pub const fn voltage(&self) -> Scalar {
        self.voltage
    }

    /// Owned entries in circuit order.
    #[must_use]
    pub fn entries(&self) -> &[CircuitEntry] {
        &self.entries
    }

    /// Component snapshot at `index`.
    pub fn component(&self, index: usize) -> Result<&Component, IndexError> {
        self.check_index(index)?;
        Ok(&self.entries[index].component)
    }

    /// Per-entry summaries at the current frequency, in circuit order.
    #[must_use]
    pub fn summaries(&self) -> Vec<EntrySummary> {
        let omega = angular_frequency(self.frequency);
        self.entries
            .iter()
            .map(|entry| EntrySummary {
                kind: entry.component.kind(),
                symbol: entry.component.symbol(),
                value: entry.component.value(),
                impedance: entry.component.impedance(omega),
                connection: entry.connection,
                nested: entry.nested,
            })
            .collect()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the circuit has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Aggregate impedance, or [`DivisionError`] when a parallel block is open.
    pub fn try_impedance(&self) -> Result<Complex<Scalar>, DivisionError> {
        self.impedance
    }

    /// Aggregate impedance; an open parallel block reports `∞ + 0j`.
    #[must_use]
    pub fn impedance(&self) -> Complex<Scalar> {
        self.impedance.unwrap_or_else(|_| open_circuit())
    }

    /// Returns true when some parallel block has no finite impedance.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.impedance.is_err()
    }

    /// Impedance magnitude in ohms.
    #[must_use]
    pub fn magnitude(&self) -> Scalar {
        self.impedance().norm()
    }

    /// Impedance phase in radians, in `(-π, π]`.
    #[must_use]
    pub fn phase(&self) -> Scalar {
        self.impedance().arg()
    }

    /// Current magnitude `V / |Z|` in amperes.
    ///
    /// `None` for a circuit without entries or with zero impedance magnitude.
    #[must_use]
    pub fn current(&self) -> Option<Scalar> {
        let magnitude = self.magnitude();
        if self.is_empty() || magnitude == 0.0 {
            None
        } else {
            Some(self.voltage / magnitude)
        }
    }

    /// Phase of the current relative to the source voltage, `-arg(Z)`.
    #[must_use]
    pub fn current_phase(&self) -> Option<Scalar> {
        self.current().map(|_| -self.phase())
    }

    /// Current as a phasor, taking the source voltage as the zero-phase reference.
    #[must_use]
    pub fn current_phasor(&self) -> Option<CScalar> {
        self.current().map(|magnitude| phasor(-self.phase()) * magnitude)
    }

    /// Evaluates the same topology at another frequency without mutating the circuit.
    pub fn impedance_at(&self, frequency_hz: Scalar) -> Result<Complex<Scalar>, DivisionError> {
        let omega = angular_frequency(frequency_hz);
        reduce(
            self.entries
                .iter()
                .map(|entry| (entry.component.impedance(omega), entry.connection)),
        )
    }

    fn check_index(&self, index: usize) -> Result<(), IndexError> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(IndexError {
                index,
                len: self.entries.len(),
            })
        }
    }

    fn recompute(&mut self) {
        self.impedance = self.impedance_at(self.frequency);
        match self.impedance {
            Ok(z) => tracing::debug!(
                entries = self.entries.len(),
                frequency = self.frequency,
                re = z.re,
                im = z.im,
                "circuit impedance recomputed"
            ),
            Err(_) => tracing::warn!(
                entries = self.entries.len(),
                frequency = self.frequency,
                "parallel block is open at this frequency"
            ),
        }
    }
}
